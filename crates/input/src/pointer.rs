//! Pointer input: terminal mouse events and a keyboard cursor for grid games.
//!
//! A grid cell is drawn two terminal columns wide and one row tall, so a
//! terminal row counts as two horizontal units when mapping to the grid.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, MinesweeperAction, Position};

/// Terminal columns per grid cell
pub const CELL_COLUMNS: u16 = 2;

/// Where the grid starts on screen and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArea {
    pub left: u16,
    pub top: u16,
    pub cols: u8,
    pub rows: u8,
}

impl GridArea {
    /// Grid cell under a terminal cell, `None` outside the grid.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.left || row < self.top {
            return None;
        }
        let px = (column - self.left) as u32;
        let py = (row - self.top) as u32 * CELL_COLUMNS as u32;
        let pos = Position::from_screen(px, py, CELL_COLUMNS as u32);
        (pos.x < self.cols as i32 && pos.y < self.rows as i32).then_some(pos)
    }
}

/// Left click reveals, right click toggles a flag.
pub fn mouse_action(event: MouseEvent, area: GridArea) -> Option<MinesweeperAction> {
    let MouseEventKind::Down(button) = event.kind else {
        return None;
    };
    let pos = area.cell_at(event.column, event.row)?;
    match button {
        MouseButton::Left => Some(MinesweeperAction::Reveal(pos)),
        MouseButton::Right => Some(MinesweeperAction::ToggleFlag(pos)),
        MouseButton::Middle => None,
    }
}

/// Keyboard-driven selection clamped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pos: Position,
    cols: u8,
    rows: u8,
}

impl GridCursor {
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            pos: Position::new(0, 0),
            cols,
            rows,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn step(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        let next = self.pos.offset(dx, dy);
        self.pos = Position::new(
            next.x.clamp(0, self.cols as i32 - 1),
            next.y.clamp(0, self.rows as i32 - 1),
        );
    }

    /// Follow the mouse so keyboard and pointer agree
    pub fn set(&mut self, pos: Position) {
        if pos.x >= 0 && pos.y >= 0 && pos.x < self.cols as i32 && pos.y < self.rows as i32 {
            self.pos = pos;
        }
    }
}
