//! Line-delimited JSON event replay.
//!
//! Each non-blank line is a `board` or `tick` event. After every accepted
//! event the rendered grid is written, followed by a blank line. Lines that
//! fail to parse or that the board rejects are logged and skipped; the board
//! keeps its previous state.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::{Board, BoardEvent};

/// Replay every line of `input` against `board`, writing frames to `out`.
///
/// Returns the number of events applied. Only I/O failures end the replay
/// early.
pub fn replay<R: BufRead, W: Write>(input: R, mut out: W, board: &mut Board) -> Result<usize> {
    let mut applied = 0;
    for (n, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", n + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        match BoardEvent::parse(&line).and_then(|ev| board.apply(ev)) {
            Ok(()) => {
                applied += 1;
                debug!(line = n + 1, "applied event");
                writeln!(out, "{}\n", board.rendered())?;
            }
            Err(e) => warn!(line = n + 1, error = %e, "skipping event"),
        }
    }
    out.flush()?;
    Ok(applied)
}
