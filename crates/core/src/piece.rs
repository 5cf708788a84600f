//! Piece module - the active piece overlaid on the board
//!
//! A `Piece` is pure data: the cells it occupies plus the marker drawn on each.
//! It knows nothing about movement or rotation; the driver computes absolute
//! positions and hands the board a fresh piece every time they change.

use crate::types::{Marker, PieceKind, Position, EMPTY_MARKER};

/// A set of occupied grid cells sharing one marker.
///
/// Positions are kept in the order given. Duplicates are allowed; when the
/// board composites, later entries overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    positions: Vec<Position>,
    marker: Marker,
}

impl Piece {
    pub fn new(positions: Vec<Position>, marker: Marker) -> Self {
        Self {
            positions,
            marker,
        }
    }

    /// The piece a board starts with: no cells, empty marker
    pub fn empty() -> Self {
        Self::new(Vec::new(), EMPTY_MARKER)
    }

    /// Place a tetromino's spawn shape with its box's top-left corner at `origin`.
    ///
    /// ```
    /// use tetris_board_core::Piece;
    /// use tetris_board_core::types::PieceKind;
    ///
    /// let piece = Piece::from_kind(PieceKind::O, (5, 3));
    /// assert_eq!(piece.positions(), &[(5, 4), (5, 5), (6, 4), (6, 5)]);
    /// assert_eq!(piece.marker(), 'O');
    /// ```
    pub fn from_kind(kind: PieceKind, origin: Position) -> Self {
        let (r0, c0) = origin;
        let positions: Vec<Position> = kind
            .cells()
            .iter()
            .map(|&(dr, dc)| (r0.saturating_add(dr), c0.saturating_add(dc)))
            .collect();
        Self::new(positions, kind.marker())
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Same shape shifted by `(dr, dc)`.
    ///
    /// Coordinates saturate at the `i32` limits; such cells are off any board
    /// and get rejected when the piece is placed.
    pub fn translated(&self, dr: i32, dc: i32) -> Self {
        Self::new(
            self.positions
                .iter()
                .map(|&(r, c)| (r.saturating_add(dr), c.saturating_add(dc)))
                .collect(),
            self.marker,
        )
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::empty()
    }
}
