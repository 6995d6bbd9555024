//! Layout text parsing.
//!
//! This module turns the plain-text key matrix format into a [`Layout`](crate::models::Layout).
//! Parsing is split into a byte source, a two-state scanner, and a cursor
//! that enforces the row/column/layer structure.

pub mod cursor;
pub mod error;
pub mod layout;
pub mod scanner;
pub mod source;

// Re-export commonly used items
pub use error::{ParseError, ParseErrorKind};
pub use layout::{find_parse_error, parse_layout_file, parse_layout_reader, parse_layout_str};
