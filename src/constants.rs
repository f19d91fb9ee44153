//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the editor defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "pourlab";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "pourlab";

/// Capacity of newly created beakers when no reference beaker is selected.
pub const DEFAULT_BEAKER_CAPACITY: usize = 5;

/// Number of empty beakers on a fresh board.
pub const DEFAULT_BEAKER_COUNT: usize = 2;

/// Number of color swatches shown in the editor swatch bar.
pub const DEFAULT_SWATCH_COUNT: usize = 10;

/// Maximum number of beakers per row in the board grid.
pub const DEFAULT_GRID_COLUMNS: usize = 6;
