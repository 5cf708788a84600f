//! BoardView: maps a rendered marker grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Marker, PieceKind, EMPTY_MARKER};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws a board grid inside a border, scaled by a per-cell character box.
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `caption` is drawn on the row below the frame when there is room.
    pub fn render_into(
        &self,
        grid: &Grid,
        caption: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = scaled(grid.cols(), self.cell_w);
        let board_px_h = scaled(grid.rows(), self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Rows and columns past the viewport edge are clipped, not wrapped.
        for (r, row) in grid.rows_iter().enumerate() {
            let Some(py) = cell_origin(start_y, r, self.cell_h).filter(|&y| y < viewport.height)
            else {
                break;
            };
            for (c, &marker) in row.iter().enumerate() {
                let Some(px) =
                    cell_origin(start_x, c, self.cell_w).filter(|&x| x < viewport.width)
                else {
                    break;
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, marker_cell(marker));
            }
        }

        if let Some(text) = caption {
            let y = start_y.saturating_add(frame_h);
            if y < viewport.height {
                let text_w = text.chars().count() as u16;
                let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
                fb.put_str(x, y, text, CellStyle::default().dim());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, None, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.set(x, y, style.with_char('┌'));
        fb.set(right, y, style.with_char('┐'));
        fb.set(x, bottom, style.with_char('└'));
        fb.set(right, bottom, style.with_char('┘'));

        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.with_char('─'));
            fb.set(x + dx, bottom, style.with_char('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.with_char('│'));
            fb.set(right, y + dy, style.with_char('│'));
        }
    }
}

/// `n` board cells in terminal units, saturating at `u16::MAX`.
fn scaled(n: usize, scale: u16) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX).saturating_mul(scale)
}

/// Terminal coordinate of cell `index` inside a frame starting at `start`,
/// `None` once it no longer fits in a `u16`.
fn cell_origin(start: u16, index: usize, scale: u16) -> Option<u16> {
    u16::try_from(index)
        .ok()?
        .checked_mul(scale)?
        .checked_add(start)?
        .checked_add(1)
}

/// Terminal cell for one board marker.
///
/// Empty cells become a dim dot, tetromino letters a solid block in the
/// piece's color, anything else its own character in a neutral tone.
pub fn marker_cell(marker: Marker) -> Cell {
    if marker == EMPTY_MARKER {
        return CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG)
            .dim()
            .with_char('·');
    }
    match PieceKind::from_marker(marker) {
        Some(kind) => CellStyle::new(piece_color(kind), PLAYFIELD_BG)
            .bold()
            .with_char('█'),
        None => CellStyle::new(Rgb::new(200, 200, 200), PLAYFIELD_BG).with_char(marker),
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_marker_is_dim_dot() {
        let cell = marker_cell('_');
        assert_eq!(cell.ch, '·');
        assert!(cell.style.dim);
    }

    #[test]
    fn piece_marker_uses_piece_color() {
        let cell = marker_cell('z');
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, piece_color(PieceKind::Z));
    }

    #[test]
    fn cell_origin_stops_at_u16_limit() {
        assert_eq!(cell_origin(0, 3, 2), Some(7));
        assert_eq!(cell_origin(0, 40_000, 2), None);
        assert_eq!(cell_origin(0, 70_000, 1), None);
        assert_eq!(scaled(100_000, 2), u16::MAX);
    }

    #[test]
    fn unknown_marker_drawn_as_itself() {
        assert_eq!(marker_cell('#').ch, '#');
    }
}
