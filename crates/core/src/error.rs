//! Error types for board compositing.

use thiserror::Error;

/// Why a board operation rejected its input.
///
/// Every mutator validates first, so a returned error means the board is
/// exactly as it was before the call.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Board or grid constructed with a zero dimension
    #[error("Invalid board dimensions: {rows}x{cols} (both must be positive)")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Static grid does not match the board's dimensions
    #[error("Grid shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// One row of a nested matrix has a different length than the first
    #[error("Ragged grid: row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Piece position outside the board
    #[error("Position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    /// Board event could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
