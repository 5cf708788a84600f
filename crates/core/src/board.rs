//! Board module - static grid plus active piece, composited on every change
//!
//! The board keeps two inputs and one output:
//! - the static grid of settled cells (never contains the active piece)
//! - the active piece
//! - the rendered grid: a copy of the static grid with the piece drawn over it
//!
//! The rendered grid is rebuilt eagerly on every successful mutation, so reads
//! never see a stale frame. Inputs are validated before anything is written;
//! a rejected call leaves all three fields untouched.

use tracing::{debug, warn};

use crate::error::BoardError;
use crate::event::BoardEvent;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::Marker;

/// A fixed-size board with one overlaid piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    static_grid: Grid,
    piece: Piece,
    rendered: Grid,
}

impl Board {
    /// Create an empty `rows x cols` board.
    ///
    /// ```
    /// use tetris_board_core::Board;
    ///
    /// let board = Board::new(4, 4).unwrap();
    /// assert_eq!(board.rendered().to_string(), "____\n____\n____\n____");
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            warn!(rows, cols, "rejected board dimensions");
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        let static_grid = Grid::empty(rows, cols);
        let rendered = static_grid.clone();
        Ok(Self {
            rows,
            cols,
            static_grid,
            piece: Piece::empty(),
            rendered,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Settled cells, without the active piece
    pub fn static_grid(&self) -> &Grid {
        &self.static_grid
    }

    /// The active piece
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// The composited grid for display
    pub fn rendered(&self) -> &Grid {
        &self.rendered
    }

    /// An owned copy of the composited grid
    pub fn render(&self) -> Grid {
        self.rendered.clone()
    }

    /// Replace the settled cells.
    ///
    /// The board takes the grid by value, so the caller keeps no handle that
    /// could alter it afterwards. The active piece stays where it is.
    pub fn replace_static_grid(&mut self, grid: Grid) -> Result<(), BoardError> {
        self.check_shape(&grid)?;
        self.static_grid = grid;
        self.recompute();
        Ok(())
    }

    /// Replace the settled cells from nested rows, copying them.
    pub fn replace_static_rows(&mut self, rows: &[Vec<Marker>]) -> Result<(), BoardError> {
        let grid = Grid::from_rows(rows.to_vec())?;
        self.replace_static_grid(grid)
    }

    /// Replace the active piece. The previous piece's overlay is discarded.
    pub fn replace_piece(&mut self, piece: Piece) -> Result<(), BoardError> {
        self.check_bounds(&piece)?;
        self.piece = piece;
        self.recompute();
        Ok(())
    }

    /// Drop the active piece, leaving only settled cells visible
    pub fn clear_piece(&mut self) {
        self.piece = Piece::empty();
        self.recompute();
    }

    /// Apply a driver event: `board` replaces the static grid, `tick` the piece.
    pub fn apply(&mut self, event: BoardEvent) -> Result<(), BoardError> {
        match event {
            BoardEvent::Board { rows } => self.replace_static_grid(Grid::from_strings(&rows)?),
            BoardEvent::Tick { positions, marker } => {
                let positions = positions.into_iter().map(|[r, c]| (r, c)).collect();
                self.replace_piece(Piece::new(positions, marker))
            }
        }
    }

    fn check_shape(&self, grid: &Grid) -> Result<(), BoardError> {
        if grid.rows() != self.rows || grid.cols() != self.cols {
            warn!(
                rows = grid.rows(),
                cols = grid.cols(),
                expected_rows = self.rows,
                expected_cols = self.cols,
                "rejected static grid"
            );
            return Err(BoardError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(())
    }

    fn check_bounds(&self, piece: &Piece) -> Result<(), BoardError> {
        if let Some(&(row, col)) = piece
            .positions()
            .iter()
            .find(|&&pos| !self.static_grid.contains(pos))
        {
            warn!(row, col, marker = %piece.marker(), "rejected piece position");
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Rebuild the rendered grid from the static grid and the piece.
    fn recompute(&mut self) {
        let mut rendered = self.static_grid.clone();
        for &pos in self.piece.positions() {
            // Positions were bounds-checked when the piece was accepted.
            rendered.set(pos, self.piece.marker());
        }
        debug!(
            overlay = self.piece.positions().len(),
            marker = %self.piece.marker(),
            "board recomposited"
        );
        self.rendered = rendered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EMPTY_MARKER;

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new(3, 5).unwrap();
        assert_eq!((board.rows(), board.cols()), (3, 5));
        assert_eq!(board.rendered().count(EMPTY_MARKER), 15);
        assert_eq!(board.rendered(), board.static_grid());
        assert!(board.piece().is_empty());
    }

    #[test]
    fn test_board_rejects_zero_dimensions() {
        assert!(matches!(
            Board::new(0, 4),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 4 })
        ));
        assert!(Board::new(4, 0).is_err());
    }

    #[test]
    fn test_overlay_writes_piece_marker() {
        let mut board = Board::new(4, 4).unwrap();
        board
            .replace_piece(Piece::new(vec![(0, 0), (0, 1)], 'X'))
            .unwrap();
        assert_eq!(board.rendered().row(0), Some(&['X', 'X', '_', '_'][..]));
        assert_eq!(board.static_grid().count('X'), 0);
    }

    #[test]
    fn test_duplicate_positions_last_write_wins() {
        let mut board = Board::new(2, 2).unwrap();
        board
            .replace_piece(Piece::new(vec![(1, 1), (1, 1)], 'S'))
            .unwrap();
        assert_eq!(board.rendered().get((1, 1)), Some('S'));
        assert_eq!(board.rendered().count('S'), 1);
    }

    #[test]
    fn test_rejected_piece_keeps_previous_state() {
        let mut board = Board::new(4, 4).unwrap();
        board.replace_piece(Piece::new(vec![(2, 2)], 'T')).unwrap();
        let before = board.clone();

        let err = board
            .replace_piece(Piece::new(vec![(0, 0), (0, 4)], 'Z'))
            .unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { row: 0, col: 4, .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_piece_reverts_to_static() {
        let mut board = Board::new(2, 3).unwrap();
        board
            .replace_static_grid(Grid::from_strings(&["___", "L__"]).unwrap())
            .unwrap();
        board.replace_piece(Piece::new(vec![(1, 0)], 'I')).unwrap();
        assert_eq!(board.rendered().get((1, 0)), Some('I'));

        board.clear_piece();
        assert_eq!(board.rendered().get((1, 0)), Some('L'));
    }
}
