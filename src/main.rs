//! Terminal board demo (default binary).
//!
//! A scripted driver drops tetrominoes straight down, locking each one into
//! the static grid when it lands, and redraws the composited board every tick.
//! The driver owns all movement and collision logic; the board only merges
//! what it is told. Press `q` or `Esc` to quit.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::info;

use tetris_board::config::Config;
use tetris_board::core::{Board, Grid, Piece};
use tetris_board::logging;
use tetris_board::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tetris_board::types::{PieceKind, EMPTY_MARKER};

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_path {
        logging::init_file(path)?;
    }
    info!(?config, "starting board demo");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Feeds the board one falling piece at a time.
struct Driver {
    spawned: usize,
}

impl Driver {
    fn new() -> Self {
        Self { spawned: 0 }
    }

    fn spawn(&mut self, cols: usize) -> Piece {
        let kind = PieceKind::ALL[self.spawned % PieceKind::ALL.len()];
        // Walk the spawn column across the board so the stack grows unevenly.
        let lanes = cols.saturating_sub(3).max(1);
        let col = (self.spawned * 3) % lanes;
        self.spawned += 1;
        Piece::from_kind(kind, (0, col as i32))
    }
}

/// Whether every cell of `piece` is on the board and not yet settled.
fn fits(board: &Board, piece: &Piece) -> bool {
    piece
        .positions()
        .iter()
        .all(|&pos| board.static_grid().get(pos) == Some(EMPTY_MARKER))
}

/// Advance the falling piece one row, or lock it and spawn the next.
fn step(board: &mut Board, driver: &mut Driver) -> Result<()> {
    let falling = board.piece().translated(1, 0);
    if !board.piece().is_empty() && fits(board, &falling) {
        board.replace_piece(falling)?;
        return Ok(());
    }

    if !board.piece().is_empty() {
        // Lock in: the composited frame becomes the new settled grid.
        let settled = board.render();
        board.replace_static_grid(settled)?;
    }

    let next = driver.spawn(board.cols());
    if !fits(board, &next) {
        info!(pieces = driver.spawned, "stack reached the top, clearing");
        board.replace_static_grid(Grid::empty(board.rows(), board.cols()))?;
    }
    board
        .replace_piece(next)
        .context("board too narrow for a tetromino")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut board = Board::new(config.rows, config.cols)?;
    let mut driver = Driver::new();
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(board.rendered(), Some("q: quit"), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            step(&mut board, &mut driver)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_spawns_a_piece() {
        let mut board = Board::new(6, 10).unwrap();
        let mut driver = Driver::new();
        step(&mut board, &mut driver).unwrap();
        assert_eq!(board.piece().positions().len(), 4);
        assert_eq!(board.rendered().count('I'), 4);
    }

    #[test]
    fn landed_piece_locks_into_static_grid() {
        let mut board = Board::new(3, 10).unwrap();
        let mut driver = Driver::new();
        // Spawn I on row 1, fall to row 2, then lock on the next step.
        for _ in 0..3 {
            step(&mut board, &mut driver).unwrap();
        }
        assert_eq!(board.static_grid().count('I'), 4);
        assert_eq!(board.piece().marker(), 'O');
    }

    #[test]
    fn narrow_board_is_an_error() {
        let mut board = Board::new(6, 2).unwrap();
        let mut driver = Driver::new();
        assert!(step(&mut board, &mut driver).is_err());
    }
}
