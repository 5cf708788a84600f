//! Thread-safe board handle.
//!
//! `Board` is a plain `&mut self` value. When a game loop thread mutates it while
//! a render thread reads it, wrap it in a `SharedBoard`: each operation holds
//! one lock for its whole validate, swap and recompute sequence, so readers see
//! either the old frame or the new one.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::board::Board;
use crate::error::BoardError;
use crate::event::BoardEvent;
use crate::grid::Grid;
use crate::piece::Piece;

#[derive(Debug, Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        // Mutators validate before writing, so a panicking holder cannot leave
        // a half-updated board behind.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn replace_static_grid(&self, grid: Grid) -> Result<(), BoardError> {
        self.lock().replace_static_grid(grid)
    }

    pub fn replace_piece(&self, piece: Piece) -> Result<(), BoardError> {
        self.lock().replace_piece(piece)
    }

    pub fn clear_piece(&self) {
        self.lock().clear_piece()
    }

    pub fn apply(&self, event: BoardEvent) -> Result<(), BoardError> {
        self.lock().apply(event)
    }

    /// Copy of the current rendered grid
    pub fn snapshot(&self) -> Grid {
        self.lock().render()
    }

    /// Run `f` with the board locked
    pub fn with<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        let board = self.lock();
        f(&*board)
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_board() {
        let a = SharedBoard::new(Board::new(2, 2).unwrap());
        let b = a.clone();
        a.replace_piece(Piece::new(vec![(0, 0)], 'O')).unwrap();
        assert_eq!(b.snapshot().get((0, 0)), Some('O'));
        assert_eq!(b.with(|board| board.piece().marker()), 'O');
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedBoard::new(Board::new(2, 2).unwrap());
        let mut snap = shared.snapshot();
        snap.set((1, 1), 'Z');
        assert_eq!(shared.snapshot().get((1, 1)), Some('_'));
    }
}
