//! Replay line-delimited JSON board events from stdin.
//!
//! See [`tetris_board::replay`] for the line format.

use std::io;

use anyhow::Result;
use tracing::info;

use tetris_board::config::Config;
use tetris_board::core::Board;
use tetris_board::{logging, replay};

fn main() -> Result<()> {
    logging::init_stderr()?;
    let config = Config::from_env();
    let mut board = Board::new(config.rows, config.cols)?;

    let applied = replay::replay(io::stdin().lock(), io::stdout().lock(), &mut board)?;

    info!(applied, "replay finished");
    Ok(())
}
