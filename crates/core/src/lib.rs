//! Board compositing core - pure, deterministic, and testable
//!
//! This crate holds the display model of a falling-block game: a static grid
//! of settled cells and one active piece, merged into a rendered grid that is
//! always current. It has no dependencies on terminal I/O, timing or input.
//!
//! Movement, rotation, collision and line clearing belong to the driver. The
//! driver tells the board what changed; the board tells the display what to draw.
//!
//! # Module Structure
//!
//! - [`grid`]: dense marker matrix with bounds-checked access
//! - [`piece`]: the active piece, positions plus one marker
//! - [`board`]: static grid + piece, eagerly composited
//! - [`event`]: JSON `board` / `tick` messages a driver can stream in
//! - [`shared`]: mutex-guarded board for multi-threaded drivers
//! - [`error`]: why an input was rejected
//!
//! # Example
//!
//! ```
//! use tetris_board_core::{Board, Grid, Piece};
//!
//! let mut board = Board::new(4, 4).unwrap();
//! board.replace_piece(Piece::new(vec![(0, 0), (0, 1)], 'X')).unwrap();
//! assert_eq!(board.rendered().to_strings()[0], "XX__");
//!
//! let settled = Grid::from_strings(&["____", "____", "____", "___O"]).unwrap();
//! board.replace_static_grid(settled).unwrap();
//! assert_eq!(board.rendered().to_strings(), vec!["XX__", "____", "____", "___O"]);
//! ```

pub mod board;
pub mod error;
pub mod event;
pub mod grid;
pub mod piece;
pub mod shared;

pub use tetris_board_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use event::BoardEvent;
pub use grid::Grid;
pub use piece::Piece;
pub use shared::SharedBoard;
