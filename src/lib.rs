//! Water-Sort Workspace Library
//!
//! This library provides core functionality for the pourlab application:
//! the board model of beakers and liquid units, the clipboard text codec,
//! and the terminal UI that edits boards by mouse.

// Module declarations
pub mod codec;
pub mod config;
pub mod constants;
pub mod models;
pub mod tui;
