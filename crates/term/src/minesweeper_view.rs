//! MinesweeperView: board, clock and flag counter.
//!
//! The board origin is exposed so mouse clicks can be mapped back to cells
//! with the same geometry that drew them.

use crate::core::{CellState, MinesweeperGame, Outcome};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::frame::{panel_entry, AnchorY, BoardFrame, Viewport, BOARD_BG, HINT, LABEL};
use crate::types::{PlayState, Position};

const COVERED: CellStyle = CellStyle::new(Rgb::new(110, 110, 125), BOARD_BG);
const FLAG: CellStyle = CellStyle::new(Rgb::new(240, 200, 60), BOARD_BG).bold();
const BOMB: CellStyle = CellStyle::new(Rgb::new(230, 70, 70), BOARD_BG).bold();
const OPEN: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(45, 45, 55));
const CURSOR_BG: Rgb = Rgb::new(70, 90, 140);

pub const WON_MESSAGE: &str = "MISSION COMPLETE";
pub const LOST_MESSAGE: &str = "MISSION FAILED";

fn count_color(n: u8) -> Rgb {
    match n {
        1 => Rgb::new(100, 150, 240),
        2 => Rgb::new(100, 200, 120),
        3 => Rgb::new(230, 90, 90),
        4 => Rgb::new(170, 110, 220),
        _ => Rgb::new(240, 160, 60),
    }
}

pub struct MinesweeperView {
    anchor_y: AnchorY,
}

impl Default for MinesweeperView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl MinesweeperView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn frame(&self, game: &MinesweeperGame, viewport: Viewport) -> BoardFrame {
        let cfg = game.config();
        BoardFrame::layout(cfg.cols as u16, cfg.rows as u16, 2, 1, self.anchor_y, viewport)
    }

    /// Terminal cell of board cell (0, 0).
    pub fn grid_origin(&self, game: &MinesweeperGame, viewport: Viewport) -> (u16, u16) {
        self.frame(game, viewport).inner_origin()
    }

    pub fn render_into(
        &self,
        game: &MinesweeperGame,
        cursor: Option<Position>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(game, viewport);
        frame.draw_empty(fb, ' ');
        let (ix, iy) = frame.inner_origin();
        let lost = game.outcome() == Some(Outcome::Lost);

        for cell in game.cells() {
            let Position { x, y } = cell.position;
            let mut style = match cell.state {
                CellState::Covered if lost && cell.is_bomb => BOMB,
                CellState::Covered => COVERED,
                CellState::Flagged => FLAG,
                CellState::Revealed if cell.is_bomb => BOMB,
                CellState::Revealed => OPEN,
            };
            if cursor == Some(cell.position) && game.status() == PlayState::Running {
                style.bg = CURSOR_BG;
            }
            let glyph = match cell.state {
                CellState::Covered if lost && cell.is_bomb => '*',
                CellState::Covered => '▒',
                CellState::Flagged => '⚑',
                CellState::Revealed if cell.is_bomb => '*',
                CellState::Revealed => ' ',
            };
            if glyph == '▒' {
                frame.fill_cell_i32(fb, x, y, glyph, style);
                continue;
            }
            frame.fill_cell_i32(fb, x, y, ' ', style);
            let px = ix + 2 * x as u16;
            let py = iy + y as u16;
            if cell.state == CellState::Revealed && !cell.is_bomb && cell.bomb_neighbors > 0 {
                let digit = char::from(b'0' + cell.bomb_neighbors);
                let number = CellStyle {
                    fg: count_color(cell.bomb_neighbors),
                    bold: true,
                    ..style
                };
                fb.put_char(px, py, digit, number);
            } else {
                fb.put_char(px, py, glyph, style);
            }
        }

        if let Some(x) = frame.panel_x(viewport, 20) {
            let mut y = frame.y;
            panel_entry(fb, x, &mut y, "TIME", &game.clock().display());
            fb.put_str(x, y, &game.flags_display(), LABEL);
            y = y.saturating_add(2);
            fb.put_str(x, y, "click/space reveal", HINT);
            fb.put_str(x, y.saturating_add(1), "right-click/f flag", HINT);
        }

        match (game.status(), game.outcome()) {
            (PlayState::Idle, _) => frame.overlay(fb, "PRESS ENTER"),
            (PlayState::Ended, Some(Outcome::Won)) => frame.caption(fb, WON_MESSAGE, LABEL),
            (PlayState::Ended, _) => frame.caption(fb, LOST_MESSAGE, LABEL),
            (PlayState::Running, _) => {}
        }
    }

    pub fn render(
        &self,
        game: &MinesweeperGame,
        cursor: Option<Position>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, cursor, viewport, &mut fb);
        fb
    }
}
