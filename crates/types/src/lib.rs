//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the compositing core, the terminal view and the binaries alike.
//!
//! # Markers
//!
//! Every grid cell holds a single display character, a [`Marker`]. The empty
//! cell is [`EMPTY_MARKER`] (`'_'`); settled and active cells carry the letter of
//! the tetromino that produced them.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs. Row 0 is the top of the board, column 0 the
//! left edge. They are signed so that a driver computing an off-board position
//! (e.g. a piece nudged past the left wall) can still express it and have it
//! rejected.
//!
//! # Examples
//!
//! ```
//! use tetris_board_types::{PieceKind, EMPTY_MARKER, DEFAULT_ROWS, DEFAULT_COLS};
//!
//! assert_eq!(EMPTY_MARKER, '_');
//! assert_eq!(PieceKind::from_marker('t'), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.marker(), 'T');
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLS), (21, 10));
//! ```

/// A single grid cell display code.
pub type Marker = char;

/// A `(row, col)` grid coordinate.
pub type Position = (i32, i32);

/// Marker of an empty cell.
pub const EMPTY_MARKER: Marker = '_';

/// Default board height in rows (21, one hidden spawn row above a 20-row field)
pub const DEFAULT_ROWS: usize = 21;

/// Default board width in columns (10)
pub const DEFAULT_COLS: usize = 10;

/// The seven tetromino piece kinds
///
/// Each piece is drawn with its letter as marker:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order the demo driver cycles through them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse a piece kind from its marker (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_board_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_marker('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_marker('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_marker('_'), None);
    /// ```
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used as this kind's grid marker
    pub fn marker(&self) -> Marker {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Cells of the spawn orientation, as `(row, col)` offsets from the
    /// top-left corner of a 4x4 box.
    pub fn cells(&self) -> [Position; 4] {
        match self {
            PieceKind::I => [(1, 0), (1, 1), (1, 2), (1, 3)],
            PieceKind::O => [(0, 1), (0, 2), (1, 1), (1, 2)],
            PieceKind::T => [(0, 1), (0, 2), (0, 3), (1, 2)],
            PieceKind::S => [(0, 2), (0, 3), (1, 1), (1, 2)],
            PieceKind::Z => [(0, 1), (0, 2), (1, 2), (1, 3)],
            PieceKind::J => [(0, 1), (0, 2), (0, 3), (1, 3)],
            PieceKind::L => [(0, 1), (0, 2), (0, 3), (1, 1)],
        }
    }
}
