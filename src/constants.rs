//! Application-wide constants.
//!
//! This module defines the application name and the physical matrix
//! dimensions of the controller, which serve as the default geometry.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "KeyMatrix";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "keymatrix";

/// Number of rows in the controller's key matrix.
pub const ROWS: usize = 20;

/// Number of columns in the controller's key matrix.
pub const COLS: usize = 8;

/// Maximum number of layers the controller stores.
pub const MAX_LAYERS: usize = 6;

/// Longest run of digits accepted for a single key code.
pub const MAX_DIGITS: usize = 19;
