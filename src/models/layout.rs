//! Layout data model: an ordered stack of key-code layers.

use crate::models::{Geometry, KeyGrid, Position};
use anyhow::Result;

/// A complete keyboard layout.
///
/// # Invariants
///
/// - Every layer is a `rows x cols` grid matching `geometry`
/// - `layer_count() <= geometry.layer_capacity()`, so the count always
///   fits the 16-bit header
///
/// Storage grows one layer at a time; the capacity check happens when a
/// layer is added, not up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Matrix dimensions every layer conforms to
    pub geometry: Geometry,
    layers: Vec<KeyGrid>,
}

impl Layout {
    /// Creates an empty layout for the given geometry.
    #[must_use]
    pub const fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            layers: Vec::new(),
        }
    }

    /// Number of complete layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns true once the layout holds as many layers as the geometry allows.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.layers.len() >= self.geometry.layer_capacity()
    }

    /// All layers in order.
    #[must_use]
    pub fn layers(&self) -> &[KeyGrid] {
        &self.layers
    }

    /// Returns the key code at `pos` on `layer`.
    #[must_use]
    pub fn key(&self, layer: usize, pos: Position) -> Option<u16> {
        self.layers.get(layer).and_then(|grid| grid.get(pos))
    }

    /// Appends a completed layer.
    ///
    /// # Errors
    ///
    /// Fails if the layout is already at capacity or the grid does not
    /// match the layout geometry.
    pub fn push_layer(&mut self, grid: KeyGrid) -> Result<()> {
        if self.is_full() {
            anyhow::bail!(
                "Layout already holds the maximum of {} layers",
                self.geometry.layer_capacity()
            );
        }
        if grid.rows() != self.geometry.rows || grid.cols() != self.geometry.cols {
            anyhow::bail!(
                "Layer is {}x{}, expected {}x{}",
                grid.rows(),
                grid.cols(),
                self.geometry.rows,
                self.geometry.cols
            );
        }
        self.layers.push(grid);
        Ok(())
    }

    /// Iterates over every key code, layer-major, then row-major, then column-major.
    pub fn iter_keys(&self) -> impl Iterator<Item = u16> + '_ {
        self.layers
            .iter()
            .flat_map(|grid| grid.cells().iter().copied())
    }
}
