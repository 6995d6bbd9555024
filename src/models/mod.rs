//! Data models for parsed keyboard matrices.
//!
//! This module contains the core data structures shared by the parser,
//! the encoder and the CLI. Models carry no I/O.

pub mod keyboard_geometry;
pub mod layer;
pub mod layout;

// Re-export all model types
pub use keyboard_geometry::Geometry;
pub use layer::{KeyGrid, Position};
pub use layout::Layout;
