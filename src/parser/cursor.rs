//! Row/column/layer bookkeeping for scanned key codes.

use super::error::ParseErrorKind;
use super::scanner::{Key, Terminator};
use crate::models::{Geometry, Position};

/// Where a committed key code landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Layer index (0-based)
    pub layer: usize,
    /// Cell within the layer
    pub pos: Position,
    /// Key code stored in the cell
    pub value: u16,
    /// True if this cell was the last one of its layer
    pub completes_layer: bool,
}

/// Points at the next cell to fill.
///
/// Commas advance column by column, wrapping to the next row after the
/// last column and to the next layer after the last row. A line break is
/// only accepted directly after the last column of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    geometry: Geometry,
    layer: usize,
    row: usize,
    col: usize,
    line_keys: usize,
}

impl Cursor {
    /// Creates a cursor at the first cell of the first layer.
    #[must_use]
    pub const fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            layer: 0,
            row: 0,
            col: 0,
            line_keys: 0,
        }
    }

    /// Layer the cursor points into (0-based).
    #[must_use]
    pub const fn layer(&self) -> usize {
        self.layer
    }

    /// Row the cursor points at (0-based).
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column the cursor points at (0-based).
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    const fn at_layer_start(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Places `key` at the cursor and advances.
    ///
    /// # Errors
    ///
    /// - `TooManyLayers` if the key would start a layer past the geometry's capacity
    /// - `PrematureLineBreak` if a line break ends a row early
    pub fn commit(&mut self, key: Key) -> Result<Placement, ParseErrorKind> {
        if self.at_layer_start() && self.layer >= self.geometry.layer_capacity() {
            return Err(ParseErrorKind::TooManyLayers {
                limit: self.geometry.layer_capacity(),
            });
        }

        self.line_keys += 1;
        if key.terminator == Terminator::LineBreak {
            if self.col + 1 != self.geometry.cols {
                return Err(ParseErrorKind::PrematureLineBreak {
                    found: self.col + 1,
                    expected: self.geometry.cols,
                    on_line: self.line_keys,
                });
            }
            self.line_keys = 0;
        }

        let mut placement = Placement {
            layer: self.layer,
            pos: Position::new(self.row, self.col),
            value: key.value,
            completes_layer: false,
        };

        self.col += 1;
        if self.col >= self.geometry.cols {
            self.col = 0;
            self.row += 1;
            if self.row >= self.geometry.rows {
                self.row = 0;
                self.layer += 1;
                placement.completes_layer = true;
            }
        }

        Ok(placement)
    }

    /// Checks that input ended on a layer boundary.
    ///
    /// Returns the number of completed layers.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientEntries` if the last layer is incomplete.
    pub fn finish(&self) -> Result<usize, ParseErrorKind> {
        if self.at_layer_start() {
            Ok(self.layer)
        } else {
            Err(ParseErrorKind::InsufficientEntries {
                found: self.row * self.geometry.cols + self.col,
                expected: self.geometry.keys_per_layer(),
            })
        }
    }
}
