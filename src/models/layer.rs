//! A single layer of key codes.

use crate::models::Geometry;

/// Position of a key in matrix coordinates (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Matrix row
    pub row: usize,
    /// Matrix column
    pub col: usize,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One complete key-code grid (a keyboard mode or shift state).
///
/// The grid always holds exactly `rows * cols` cells, stored row-major.
/// Cells start out as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u16>,
}

impl KeyGrid {
    /// Creates a zero-filled grid sized for the given geometry.
    #[must_use]
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            rows: geometry.rows,
            cols: geometry.cols,
            cells: vec![0; geometry.keys_per_layer()],
        }
    }

    /// Builds a grid from row-major values.
    ///
    /// Returns `None` if `values` does not hold exactly `rows * cols` entries.
    #[must_use]
    pub fn from_row_major(geometry: &Geometry, values: Vec<u16>) -> Option<Self> {
        if values.len() != geometry.keys_per_layer() {
            return None;
        }
        Some(Self {
            rows: geometry.rows,
            cols: geometry.cols,
            cells: values,
        })
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the key code at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u16> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Stores a key code at `pos`. Returns false if `pos` is out of bounds.
    #[must_use]
    pub fn set(&mut self, pos: Position, keycode: u16) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = keycode;
                true
            }
            None => false,
        }
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u16]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_grid_new_is_zeroed() {
        let grid = KeyGrid::new(&Geometry::new(2, 3, 1));
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cells(), &[0; 6]);
    }

    #[test]
    fn test_key_grid_set_and_get() {
        let mut grid = KeyGrid::new(&Geometry::new(2, 3, 1));
        assert!(grid.set(Position::new(1, 2), 42));
        assert_eq!(grid.get(Position::new(1, 2)), Some(42));
        assert_eq!(grid.cells()[5], 42);
    }

    #[test]
    fn test_key_grid_out_of_bounds() {
        let mut grid = KeyGrid::new(&Geometry::new(2, 3, 1));
        assert!(!grid.set(Position::new(2, 0), 1));
        assert!(!grid.set(Position::new(0, 3), 1));
        assert_eq!(grid.get(Position::new(0, 3)), None);
    }

    #[test]
    fn test_key_grid_from_row_major() {
        let geometry = Geometry::new(2, 2, 1);
        let grid = KeyGrid::from_row_major(&geometry, vec![1, 2, 3, 4]).unwrap();
        let rows: Vec<&[u16]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);

        assert!(KeyGrid::from_row_major(&geometry, vec![1, 2, 3]).is_none());
    }
}
