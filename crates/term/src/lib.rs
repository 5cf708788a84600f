//! Terminal rendering for the board.
//!
//! A small, game-oriented rendering layer: the rendered grid is drawn into a
//! framebuffer, which is then flushed to the terminal through crossterm.
//! No widget or layout library is involved.
//!
//! - [`fb`]: styled character framebuffer
//! - [`board_view`]: rendered grid → framebuffer (pure, testable)
//! - [`renderer`]: framebuffer → terminal, with run-length diffing

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tetris_board_core as core;
pub use tetris_board_types as types;

pub use board_view::{marker_cell, piece_color, AnchorY, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame, TerminalRenderer};
