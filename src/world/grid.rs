//! Immutable obstacle grid

use crate::core::error::{Result, SimError};
use crate::core::types::Cell;

/// Rectangular boolean obstacle field; `true` cells are impassable
///
/// Constructed once at startup by the map loader and never mutated.
/// Coordinates are (row, col) with the origin at the top-left.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid from row-major rows
    ///
    /// Returns `None` when the input is empty, zero-width, or ragged; the
    /// loader maps that to a map-format error.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Whether `cell` is impassable; fails with `OutOfBounds` rather than
    /// clamping, since an out-of-range index means a corrupt grid or an
    /// agent that escaped through a boundary bug
    #[inline]
    pub fn solid(&self, cell: Cell) -> Result<bool> {
        self.get(cell.row, cell.col)
            .ok_or(SimError::OutOfBounds {
                row: cell.row as i64,
                col: cell.col as i64,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// All non-solid cells, in row-major order
    pub fn open_cells(&self) -> Vec<Cell> {
        let mut open = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if !self.cells[row * self.cols + col] {
                    open.push(Cell::new(row, col));
                }
            }
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Grid {
        Grid::from_rows(vec![
            vec![true, false],
            vec![false, true],
        ])
        .unwrap()
    }

    #[test]
    fn test_solid_within_bounds() {
        let grid = checker();
        assert!(grid.solid(Cell::new(0, 0)).unwrap());
        assert!(!grid.solid(Cell::new(0, 1)).unwrap());
        assert!(!grid.solid(Cell::new(1, 0)).unwrap());
        assert!(grid.solid(Cell::new(1, 1)).unwrap());
    }

    #[test]
    fn test_solid_out_of_bounds_errors() {
        let grid = checker();
        let err = grid.solid(Cell::new(2, 0)).unwrap_err();
        assert!(matches!(err, SimError::OutOfBounds { row: 2, col: 0, .. }));
        assert!(grid.solid(Cell::new(0, 2)).is_err());
    }

    #[test]
    fn test_open_cells_row_major() {
        let grid = checker();
        assert_eq!(grid.open_cells(), vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Grid::from_rows(vec![vec![true, false], vec![true]]).is_none());
        assert!(Grid::from_rows(vec![]).is_none());
        assert!(Grid::from_rows(vec![vec![]]).is_none());
    }
}
