//! Firmware blob encoding and delivery.
//!
//! This module serializes parsed layouts into the controller's binary
//! format and hands the result to a [`Transport`].

pub mod encoder;
pub mod transport;

// Re-export firmware types
pub use encoder::{decode, encode, encoded_len, DecodeError};
pub use transport::{FileTransport, HexDumpTransport, Transport};

use crate::models::{Geometry, Layout};
use crate::parser;
use anyhow::{Context, Result};
use std::path::Path;

/// Parses a layout file, encodes it, and sends it through `transport`.
///
/// Nothing reaches the transport unless the whole file parses.
///
/// # Errors
///
/// Returns the first parse, encode or transport failure.
pub fn flash_layout(
    path: &Path,
    geometry: Geometry,
    transport: &mut dyn Transport,
) -> Result<Layout> {
    let layout = parser::parse_layout_file(path, geometry)?;
    let data = encode(&layout);
    let layer_count = u16::try_from(layout.layer_count())
        .context("Layer count does not fit in the 16-bit header")?;

    transport
        .write_layout(&data, layer_count)
        .context("Failed to send layout")?;

    Ok(layout)
}
