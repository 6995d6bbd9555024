//! KeyMatrix Library
//!
//! This library parses plain-text keyboard matrix layouts, validates their
//! row/column/layer structure, and encodes them into the little-endian
//! binary format the keyboard controller firmware loads.
//!
//! ```
//! use keymatrix::models::Geometry;
//! use keymatrix::{firmware, parser};
//!
//! let layout = parser::parse_layout_str("1,2,3,4\n5,6,7,8\n", Geometry::new(2, 4, 6)).unwrap();
//! assert_eq!(layout.layer_count(), 1);
//!
//! let blob = firmware::encode(&layout);
//! assert_eq!(&blob[..4], &[0x01, 0x00, 0x01, 0x00]);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod firmware;
pub mod models;
pub mod parser;
