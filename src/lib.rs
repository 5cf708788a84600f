//! Tetris board (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_board::{core, term, types}` and
//! holds the pieces the binaries share: environment config, logging setup and
//! JSON event replay.

pub mod config;
pub mod logging;
pub mod replay;

pub use tetris_board_core as core;
pub use tetris_board_term as term;
pub use tetris_board_types as types;
