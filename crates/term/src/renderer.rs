//! TerminalRenderer: flushes board frames to a real terminal.
//!
//! Only the cell runs that changed since the last flushed frame are written.
//! With no previous frame, or after a resize, every row counts as changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};
use tracing::trace;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

#[derive(Default)]
pub struct TerminalRenderer {
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        out.queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        out.flush()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        let mut out = io::stdout();
        out.queue(ResetColor)?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), fb, &mut self.buf)?;
        trace!(bytes = self.buf.len(), "flushing frame");

        let mut out = io::stdout().lock();
        out.write_all(&self.buf)?;
        out.flush()?;

        if let Some(prev) = self.last.as_mut() {
            prev.clone_from(fb);
            return Ok(());
        }
        self.last = Some(fb.clone());
        Ok(())
    }
}

/// Encode the terminal commands that turn `prev` into `next`.
///
/// `None` (or a differently sized `prev`) clears the screen and repaints all
/// of `next`. Nothing is written to the terminal.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let same_size = prev.is_some_and(|p| (p.width(), p.height()) == (next.width(), next.height()));
    let runs = match prev {
        Some(prev) if same_size => changed_runs(prev, next),
        _ => {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            (0..next.height()).map(|y| (0, y, next.width())).collect()
        }
    };
    if runs.is_empty() {
        return Ok(());
    }

    let mut style: Option<CellStyle> = None;
    for (x, y, len) in runs {
        out.queue(cursor::MoveTo(x, y))?;
        for cell in (x..x + len).filter_map(|cx| next.get(cx, y)) {
            if style != Some(cell.style) {
                let s = cell.style;
                out.queue(SetAttribute(Attribute::Reset))?
                    .queue(SetColors(Colors::new(s.fg.into(), s.bg.into())))?;
                if s.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if s.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
                style = Some(s);
            }
            out.queue(Print(cell.ch))?;
        }
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// `(x, y, len)` runs of horizontally adjacent cells that differ between two
/// same-sized frames.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let w = next.width();
    for y in 0..next.height() {
        let differs = |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        while x < w {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, style.with_char('X'));
        }
        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn unchanged_frame_encodes_nothing() {
        let a = FrameBuffer::new(3, 3);
        let mut out = Vec::new();
        encode_frame(Some(&a), &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diff_is_smaller_than_full_redraw() {
        let a = FrameBuffer::new(20, 10);
        let mut b = a.clone();
        b.set(4, 4, CellStyle::default().with_char('#'));

        let mut full = Vec::new();
        encode_frame(None, &b, &mut full).unwrap();
        let mut diff = Vec::new();
        encode_frame(Some(&a), &b, &mut diff).unwrap();
        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
    }

    #[test]
    fn resized_frame_repaints_everything() {
        let a = FrameBuffer::new(4, 2);
        let b = FrameBuffer::new(6, 2);
        let mut resized = Vec::new();
        encode_frame(Some(&a), &b, &mut resized).unwrap();
        let mut full = Vec::new();
        encode_frame(None, &b, &mut full).unwrap();
        assert_eq!(resized, full);
    }

    #[test]
    fn rgb_converts_to_crossterm_color() {
        assert_eq!(
            Color::from(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
