//! Tab-delimited street-map parser
//!
//! Maps are donjon-style exports where tab characters delimit wall
//! segments: a run of consecutive tabs means adjacent solid segments, and
//! any non-tab character before a tab marks that segment as open street.
//! Each segment expands to a `street_width` run of cells, every line gains
//! an implicit right-wall segment, and every output row is repeated
//! `street_width` times so cells are square. The result is transposed
//! before it becomes the engine's [`Grid`].

use crate::world::grid::Grid;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while turning a map file into a grid
#[derive(Debug, Error)]
pub enum MapError {
    /// The file had no content at all
    #[error("map file is empty")]
    Empty,
    /// Lines expanded to rows of different widths
    #[error("map line {line} produced {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a map file from disk
pub fn load_map_file(path: &Path, street_width: usize) -> Result<Grid, MapError> {
    let text = std::fs::read_to_string(path)?;
    parse_map(&text, street_width)
}

/// Parse map text into a grid
pub fn parse_map(text: &str, street_width: usize) -> Result<Grid, MapError> {
    let text = text.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Err(MapError::Empty);
    }

    let mut rows: Vec<Vec<bool>> = Vec::new();
    let mut expected_width: Option<usize> = None;

    for (line_no, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        let mut solid = true;
        for ch in line.chars() {
            if ch == '\t' {
                row.extend(std::iter::repeat(solid).take(street_width));
                solid = true;
            } else {
                solid = false;
            }
        }
        // The trailing segment has no delimiter, so every line gets an
        // explicit right wall.
        row.extend(std::iter::repeat(solid).take(street_width));

        match expected_width {
            None => expected_width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(MapError::Ragged {
                    line: line_no + 1,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }

        for _ in 0..street_width {
            rows.push(row.clone());
        }
    }

    Grid::from_rows(transpose(rows)).ok_or(MapError::Empty)
}

fn transpose(rows: Vec<Vec<bool>>) -> Vec<Vec<bool>> {
    let width = rows.first().map(|row| row.len()).unwrap_or(0);
    (0..width)
        .map(|col| rows.iter().map(|row| row[col]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;

    // One open segment between two wall segments:
    //   tab, 'x', tab  ->  [solid, open] + right wall [solid]
    const SINGLE_STREET: &str = "\t\t\n\tx\t\n\t\t";

    #[test]
    fn test_single_street_dimensions() {
        let grid = parse_map(SINGLE_STREET, 3).unwrap();
        // 3 lines of 3 segments -> 9x9 either way; transpose keeps it square
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 9);
    }

    #[test]
    fn test_single_street_open_block() {
        let grid = parse_map(SINGLE_STREET, 3).unwrap();
        for row in 0..9 {
            for col in 0..9 {
                let open = (3..6).contains(&row) && (3..6).contains(&col);
                assert_eq!(
                    grid.solid(Cell::new(row, col)).unwrap(),
                    !open,
                    "cell ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_transpose_swaps_axes() {
        // Two segments across, one line: 1 line x 3 segments, width 2.
        // Before the transpose that is 2 rows of 6 cells; after, 6x2.
        let grid = parse_map("\tx\t", 2).unwrap();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 2);
        // Middle segment was open street
        assert!(grid.solid(Cell::new(0, 0)).unwrap());
        assert!(!grid.solid(Cell::new(2, 0)).unwrap());
        assert!(!grid.solid(Cell::new(3, 1)).unwrap());
        assert!(grid.solid(Cell::new(4, 0)).unwrap());
    }

    #[test]
    fn test_right_wall_is_appended() {
        let grid = parse_map("\tx\t", 1);
        let grid = grid.unwrap();
        // Segments: wall, street, right wall -> transposed to 3 rows x 1 col
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 1);
        assert!(grid.solid(Cell::new(2, 0)).unwrap());
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(parse_map("", 3), Err(MapError::Empty)));
        assert!(matches!(parse_map("\n\n", 3), Err(MapError::Empty)));
    }

    #[test]
    fn test_ragged_lines_rejected() {
        let err = parse_map("\t\t\n\t\t\t", 3).unwrap_err();
        match err {
            MapError::Ragged {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 9);
                assert_eq!(found, 12);
            }
            other => panic!("expected Ragged, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let grid = parse_map("\tx\t\n", 3).unwrap();
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let grid = parse_map("\t\t\r\n\tx\t\r\n\t\t\r\n", 2).unwrap();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 6);
        assert!(!grid.solid(Cell::new(2, 2)).unwrap());
    }
}
