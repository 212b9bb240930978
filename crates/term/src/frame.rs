//! Shared layout for grid games: a bordered board centred in the viewport
//! with a text panel to its right.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

pub(crate) const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub(crate) const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

pub(crate) const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
pub(crate) const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
pub(crate) const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
pub(crate) const HINT: CellStyle = CellStyle::new(Rgb::new(140, 140, 150), SCREEN_BG).dim();
pub(crate) const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
pub(crate) const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();

/// Screen placement of a `cols x rows` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardFrame {
    pub fn layout(
        cols: u16,
        rows: u16,
        cell_w: u16,
        cell_h: u16,
        anchor_y: AnchorY,
        viewport: Viewport,
    ) -> Self {
        let w = cols * cell_w + 2;
        let h = rows * cell_h + 2;
        Self {
            x: viewport.width.saturating_sub(w) / 2,
            y: match anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            cols,
            rows,
            cell_w,
            cell_h,
        }
    }

    pub fn outer_width(&self) -> u16 {
        self.cols * self.cell_w + 2
    }

    pub fn outer_height(&self) -> u16 {
        self.rows * self.cell_h + 2
    }

    /// First terminal cell inside the border.
    pub fn inner_origin(&self) -> (u16, u16) {
        (self.x + 1, self.y + 1)
    }

    /// Border plus an empty board background.
    pub fn draw_empty(&self, fb: &mut FrameBuffer, dot: char) {
        let (ix, iy) = self.inner_origin();
        let bg = CellStyle::new(EMPTY.fg, BOARD_BG);
        fb.fill_rect(ix, iy, self.cols * self.cell_w, self.rows * self.cell_h, ' ', bg);
        fb.draw_box(self.x, self.y, self.outer_width(), self.outer_height(), BORDER);
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                self.fill_cell(fb, cx, cy, dot, EMPTY);
            }
        }
    }

    /// Paint one board cell; out-of-board coordinates are skipped.
    pub fn fill_cell(&self, fb: &mut FrameBuffer, cx: u16, cy: u16, ch: char, style: CellStyle) {
        if cx >= self.cols || cy >= self.rows {
            return;
        }
        let (ix, iy) = self.inner_origin();
        fb.fill_rect(
            ix + cx * self.cell_w,
            iy + cy * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    /// Like [`BoardFrame::fill_cell`] for signed game coordinates
    pub fn fill_cell_i32(&self, fb: &mut FrameBuffer, x: i32, y: i32, ch: char, style: CellStyle) {
        if x < 0 || y < 0 {
            return;
        }
        self.fill_cell(fb, x as u16, y as u16, ch, style);
    }

    /// Column where the side panel starts, `None` if it would not fit.
    pub fn panel_x(&self, viewport: Viewport, min_width: u16) -> Option<u16> {
        let px = self.x.saturating_add(self.outer_width()).saturating_add(2);
        (px < viewport.width && viewport.width - px >= min_width).then_some(px)
    }

    /// A bold line centred over the middle row of the board
    pub fn overlay(&self, fb: &mut FrameBuffer, text: &str) {
        let mid = self.y.saturating_add(self.outer_height() / 2);
        fb.put_str_centered(self.x, self.outer_width(), mid, text, OVERLAY);
    }

    /// Text on the line just below the border
    pub fn caption(&self, fb: &mut FrameBuffer, text: &str, style: CellStyle) {
        let y = self.y.saturating_add(self.outer_height());
        fb.put_str_centered(self.x, self.outer_width(), y, text, style);
    }
}

/// Label over value, advancing `y` past a blank spacer line.
pub(crate) fn panel_entry(fb: &mut FrameBuffer, x: u16, y: &mut u16, label: &str, value: &str) {
    fb.put_str(x, *y, label, LABEL);
    *y = y.saturating_add(1);
    fb.put_str(x, *y, value, VALUE);
    *y = y.saturating_add(2);
}

pub(crate) fn panel_number(fb: &mut FrameBuffer, x: u16, y: &mut u16, label: &str, value: u32) {
    fb.put_str(x, *y, label, LABEL);
    *y = y.saturating_add(1);
    fb.put_u32(x, *y, value, VALUE);
    *y = y.saturating_add(2);
}
