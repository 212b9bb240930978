//! SnakeView: the continuous snake scene drawn on a coarse terminal grid.
//!
//! Scene coordinates are divided by the move step, so every body segment
//! lands in its own terminal cell.

use crate::core::SnakeGame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::frame::{panel_entry, panel_number, AnchorY, BoardFrame, Viewport, BOARD_BG, HINT};
use crate::types::{PlayState, Position};

const HEAD: CellStyle = CellStyle::new(Rgb::new(100, 220, 120), BOARD_BG).bold();
const BODY: CellStyle = CellStyle::new(Rgb::new(60, 160, 80), BOARD_BG);
const FRUIT: CellStyle = CellStyle::new(Rgb::new(220, 80, 80), BOARD_BG).bold();

pub struct SnakeView {
    anchor_y: AnchorY,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl SnakeView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn frame(&self, game: &SnakeGame, viewport: Viewport) -> BoardFrame {
        let cfg = game.config();
        let step = cfg.step().max(1);
        let cols = (cfg.width + step - 1) / step;
        let rows = (cfg.height + step - 1) / step;
        BoardFrame::layout(cols as u16, rows as u16, 2, 1, self.anchor_y, viewport)
    }

    pub fn render_into(&self, game: &SnakeGame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(game, viewport);
        frame.draw_empty(fb, ' ');

        let step = game.config().step().max(1);
        let to_cell = |p: Position| (p.x.div_euclid(step), p.y.div_euclid(step));

        let (fx, fy) = to_cell(game.fruit());
        frame.fill_cell_i32(fb, fx, fy, '●', FRUIT);

        // Tail first so the head wins when segments share a cell.
        for (i, seg) in game.body().iter().enumerate().rev() {
            let (x, y) = to_cell(*seg);
            let (ch, style) = if i == 0 { ('█', HEAD) } else { ('▓', BODY) };
            frame.fill_cell_i32(fb, x, y, ch, style);
        }

        if let Some(x) = frame.panel_x(viewport, 12) {
            let mut y = frame.y;
            panel_number(fb, x, &mut y, "SCORE", game.points());
            panel_number(fb, x, &mut y, "LENGTH", game.body().len() as u32);
            panel_entry(fb, x, &mut y, "STATE", game.status().as_str());
            fb.put_str(x, y, "arrows steer", HINT);
        }

        match game.status() {
            PlayState::Idle => frame.overlay(fb, "PRESS ENTER"),
            PlayState::Ended => frame.overlay(fb, "GAME OVER"),
            PlayState::Running => {}
        }
    }

    pub fn render(&self, game: &SnakeGame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }
}
