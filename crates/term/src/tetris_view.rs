//! TetrisView: maps a [`TetrisSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) so it can be unit-tested.

use crate::core::TetrisSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::frame::{panel_entry, panel_number, AnchorY, BoardFrame, Viewport, BOARD_BG, HINT};
use crate::types::{Orientation, PlayState};

const SETTLED: CellStyle = CellStyle::new(Rgb::new(80, 120, 220), BOARD_BG);
const FALLING_H: CellStyle = CellStyle::new(Rgb::new(80, 220, 220), BOARD_BG).bold();
const FALLING_V: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), BOARD_BG).bold();

pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for TetrisView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl TetrisView {
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

    pub fn frame(&self, snap: &TetrisSnapshot, viewport: Viewport) -> BoardFrame {
        BoardFrame::layout(
            snap.width as u16,
            snap.height as u16,
            self.cell_w,
            self.cell_h,
            self.anchor_y,
            viewport,
        )
    }

    /// Render into a reused framebuffer; resizes only when the viewport changed.
    pub fn render_into(&self, snap: &TetrisSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(snap, viewport);
        frame.draw_empty(fb, '·');

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                if snap.is_settled(x, y) {
                    frame.fill_cell_i32(fb, x, y, '█', SETTLED);
                }
            }
        }

        if let Some(piece) = snap.piece {
            let style = match piece.orientation {
                Orientation::Horizontal => FALLING_H,
                Orientation::Vertical => FALLING_V,
            };
            // Cells above the ceiling are simply not drawn.
            for cell in piece.cells() {
                frame.fill_cell_i32(fb, cell.x, cell.y, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, &frame);

        match snap.status {
            PlayState::Idle => frame.overlay(fb, "PRESS ENTER"),
            PlayState::Ended => frame.overlay(fb, "GAME OVER"),
            PlayState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &TetrisSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &TetrisSnapshot,
        viewport: Viewport,
        frame: &BoardFrame,
    ) {
        let Some(x) = frame.panel_x(viewport, 12) else {
            return;
        };
        let mut y = frame.y;
        panel_number(fb, x, &mut y, "SCORE", snap.points);
        panel_number(fb, x, &mut y, "ROWS", snap.rows_cleared);
        panel_entry(fb, x, &mut y, "STATE", snap.status.as_str());
        fb.put_str(x, y, "←→ move  ↑ rotate", HINT);
        fb.put_str(x, y.saturating_add(1), "↓ drop  r reset", HINT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TetrisConfig, TetrisGame};

    #[test]
    fn renders_border_and_score_panel() {
        let game = TetrisGame::new(TetrisConfig::default(), 3).unwrap();
        let fb = TetrisView::default().render(&game.snapshot(), Viewport::new(80, 24));
        assert!(fb.contains_text("╭────"));
        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("PRESS ENTER"));
    }

    #[test]
    fn settled_cells_use_block_glyph() {
        let mut snap = TetrisSnapshot::default();
        snap.rows[9] = 0b1;
        snap.status = PlayState::Running;
        let view = TetrisView::default();
        let vp = Viewport::new(40, 14);
        let fb = view.render(&snap, vp);
        let (ix, iy) = view.frame(&snap, vp).inner_origin();
        assert_eq!(fb.get(ix, iy + 9).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(ix + 2, iy + 9).map(|c| c.ch), Some('·'));
    }

    #[test]
    fn ended_game_shows_overlay() {
        let mut snap = TetrisSnapshot::default();
        snap.status = PlayState::Ended;
        let fb = TetrisView::default().render(&snap, Viewport::new(80, 24));
        assert!(fb.contains_text("GAME OVER"));
    }
}
