//! Data models for boards, beakers, and liquid colors.
//!
//! Models are independent of the UI; the TUI layer renders them and routes
//! clicks back into their operations.

pub mod beaker;
pub mod board;
pub mod color;
pub mod palette;

// Re-export all model types
pub use beaker::Beaker;
pub use board::Board;
pub use color::ColorId;
