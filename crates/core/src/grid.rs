//! Grid module - dense matrix of cell markers
//!
//! Uses a flat row-major vector for cache locality. Coordinates are `(row, col)`
//! with row 0 at the top. A `Grid` owns its storage outright: cloning is a deep
//! copy, so two grids can never observe each other's writes.

use std::fmt;

use crate::error::BoardError;
use crate::types::{Marker, Position, EMPTY_MARKER};

/// A `rows x cols` matrix of markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Marker>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn new(rows: usize, cols: usize, fill: Marker) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Create a grid of empty cells
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, EMPTY_MARKER)
    }

    /// Build a grid from nested rows, copying every cell.
    ///
    /// All rows must have the length of the first one.
    pub fn from_rows(rows: Vec<Vec<Marker>>) -> Result<Self, BoardError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(BoardError::RaggedRow {
                    row: r,
                    len: row.len(),
                    expected: n_cols,
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Build a grid from one string per row, one marker per `char`.
    ///
    /// ```
    /// use tetris_board_core::Grid;
    ///
    /// let grid = Grid::from_strings(&["__", "XO"]).unwrap();
    /// assert_eq!(grid.get((1, 1)), Some('O'));
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Calculate flat index from `(row, col)`
    #[inline(always)]
    fn index(&self, (row, col): Position) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Check if a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Get the marker at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Marker> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set the marker at `pos`.
    /// Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, marker: Marker) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = marker;
                true
            }
            None => false,
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[Marker]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate rows top to bottom
    ///
    /// Yields exactly `rows()` slices, empty ones for a zero-width grid.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Marker]> {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Marker] {
        &self.cells
    }

    /// Number of cells holding `marker`
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|&&m| m == marker).count()
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Marker>> {
        self.rows_iter().map(<[Marker]>::to_vec).collect()
    }

    /// Copy out as one string per row
    pub fn to_strings(&self) -> Vec<String> {
        self.rows_iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &m in row {
                write!(f, "{}", m)?;
            }
        }
        Ok(())
    }
}
