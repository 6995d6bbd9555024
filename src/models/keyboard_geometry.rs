//! Matrix dimensions of the target controller.

use crate::constants::{COLS, MAX_LAYERS, ROWS};
use serde::{Deserialize, Serialize};

/// Electrical key matrix dimensions and the layer capacity of the controller.
///
/// Every layer of a layout supplies exactly `rows * cols` key codes, and a
/// layout never holds more than `max_layers` layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    /// Number of matrix rows
    pub rows: usize,
    /// Number of matrix columns
    pub cols: usize,
    /// Maximum number of layers the controller stores
    pub max_layers: usize,
}

impl Geometry {
    /// Creates a geometry with the given dimensions.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, max_layers: usize) -> Self {
        Self {
            rows,
            cols,
            max_layers,
        }
    }

    /// Layers a layout may actually hold.
    ///
    /// This is `max_layers`, capped at 65535 because the encoded header
    /// stores the layer count in 16 bits.
    #[must_use]
    pub const fn layer_capacity(&self) -> usize {
        let header_max = u16::MAX as usize;
        if self.max_layers < header_max {
            self.max_layers
        } else {
            header_max
        }
    }

    /// Number of key codes in one layer.
    #[must_use]
    pub const fn keys_per_layer(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(ROWS, COLS, MAX_LAYERS)
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} matrix, up to {} layers",
            self.rows, self.cols, self.max_layers
        )
    }
}
