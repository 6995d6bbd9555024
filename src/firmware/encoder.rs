//! Binary matrix encoding for the controller.
//!
//! Wire format, all values little-endian `u16`:
//!
//! ```text
//! [layer_count] [layer 0: row 0 col 0 .. row 0 col N] .. [layer L-1 ..]
//! ```

use crate::models::{Geometry, KeyGrid, Layout};
use std::fmt;
use tracing::info;

/// Size in bytes of an encoded layout with `layers` layers.
#[must_use]
pub const fn encoded_len(geometry: &Geometry, layers: usize) -> usize {
    2 + 2 * layers * geometry.keys_per_layer()
}

/// Serializes a layout into the transfer format.
///
/// The layout is trusted as-is; all validation happens in the parser.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(layout: &Layout) -> Vec<u8> {
    let layer_count = layout.layer_count();
    let mut data = Vec::with_capacity(encoded_len(&layout.geometry, layer_count));

    // layer_count <= layer_capacity() <= u16::MAX
    data.extend_from_slice(&(layer_count as u16).to_le_bytes());
    for keycode in layout.iter_keys() {
        data.extend_from_slice(&keycode.to_le_bytes());
    }

    info!(layers = layer_count, bytes = data.len(), "encoded layout");
    data
}

/// Reasons a byte buffer is not a valid encoded layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than two bytes, so no layer count
    MissingHeader,
    /// Buffer length does not match the declared layer count
    LengthMismatch {
        /// Bytes the header implies
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },
    /// More layers than the geometry allows
    TooManyLayers {
        /// Layers declared in the header
        declared: usize,
        /// Maximum number of layers
        limit: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Buffer too short to hold a layer count"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "Buffer is {actual} bytes, expected {expected} for the declared layer count"
            ),
            Self::TooManyLayers { declared, limit } => write!(
                f,
                "Buffer declares {declared} layers, the controller holds at most {limit}"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Reads an encoded layout back into a [`Layout`].
///
/// # Errors
///
/// Fails if the header is missing, the layer count exceeds the geometry's
/// capacity, or the buffer length does not match the layer count.
pub fn decode(data: &[u8], geometry: Geometry) -> Result<Layout, DecodeError> {
    let (header, body) = match data {
        [lo, hi, body @ ..] => (u16::from_le_bytes([*lo, *hi]), body),
        _ => return Err(DecodeError::MissingHeader),
    };

    let declared = usize::from(header);
    if declared > geometry.layer_capacity() {
        return Err(DecodeError::TooManyLayers {
            declared,
            limit: geometry.layer_capacity(),
        });
    }

    let expected = encoded_len(&geometry, declared);
    if data.len() != expected {
        return Err(DecodeError::LengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mut layout = Layout::new(geometry);
    let layer_bytes = 2 * geometry.keys_per_layer();
    if layer_bytes == 0 {
        return Ok(layout);
    }
    for chunk in body.chunks_exact(layer_bytes) {
        let values = chunk
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let grid = KeyGrid::from_row_major(&geometry, values).ok_or(DecodeError::LengthMismatch {
            expected,
            actual: data.len(),
        })?;
        layout
            .push_layer(grid)
            .map_err(|_| DecodeError::TooManyLayers {
                declared,
                limit: geometry.layer_capacity(),
            })?;
    }

    Ok(layout)
}
