//! Piece module - the falling straight block
//!
//! A piece is an anchor cell, a length and an orientation. Its cells are
//! derived on every query and never cached:
//!
//! ```text
//! horizontal, length 3, origin (2,5)     vertical, length 3, origin (2,5)
//!
//!   row 5:  . . O # # .                    row 3:  . . # .
//!                                          row 4:  . . # .
//!                                          row 5:  . . O .
//! ```
//!
//! The vertical piece grows upward: its origin is the bottom cell.

use arrayvec::ArrayVec;

use crate::config::TetrisConfig;
use crate::rng::SimpleRng;
use crate::types::{Orientation, Position, PIECE_CAPACITY};

/// Cells covered by a piece (stack-only)
pub type PieceCells = ArrayVec<Position, PIECE_CAPACITY>;

/// The currently controlled falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub origin: Position,
    pub length: u8,
    pub orientation: Orientation,
}

impl Piece {
    /// Create a piece; `length` is clamped to `1..=PIECE_CAPACITY`.
    pub fn new(origin: Position, length: u8, orientation: Orientation) -> Self {
        Self {
            origin,
            length: length.clamp(1, PIECE_CAPACITY as u8),
            orientation,
        }
    }

    /// Random piece at the ceiling row.
    ///
    /// Length is uniform in `[1, max_piece_length]`, orientation is a coin flip.
    /// Vertical pieces take any column; horizontal ones only columns where the
    /// whole piece fits.
    pub fn random(rng: &mut SimpleRng, config: &TetrisConfig) -> Self {
        let length = rng.next_range(config.max_piece_length as u32) as u8 + 1;
        let orientation = if rng.next_bool() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let columns = match orientation {
            Orientation::Vertical => config.width as u32,
            Orientation::Horizontal => (config.width - (length - 1)) as u32,
        };
        let x = rng.next_range(columns) as i32;
        Self::new(Position::new(x, 0), length, orientation)
    }

    /// Cells covered by a piece with the given geometry
    pub fn cells_for(origin: Position, length: u8, orientation: Orientation) -> PieceCells {
        let (dx, dy) = match orientation {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, -1),
        };
        (0..length as i32)
            .take(PIECE_CAPACITY)
            .map(|i| origin.offset(dx * i, dy * i))
            .collect()
    }

    /// Cells currently covered
    pub fn occupied_cells(&self) -> PieceCells {
        Self::cells_for(self.origin, self.length, self.orientation)
    }

    /// Cells the piece would cover after `rotate` (origin unchanged)
    pub fn rotated_cells(&self) -> PieceCells {
        Self::cells_for(self.origin, self.length, self.orientation.toggled())
    }

    /// Cells this piece adds to `row` if it were placed now.
    ///
    /// Only meaningful for the origin row: a horizontal piece lies entirely in
    /// it, a vertical piece has exactly one cell per row.
    pub fn contribution_to_row(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.length as usize,
            Orientation::Vertical => 1,
        }
    }

    pub fn move_down(&mut self) {
        self.origin = self.origin.offset(0, 1);
    }

    pub fn move_left(&mut self) {
        self.origin = self.origin.offset(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.origin = self.origin.offset(1, 0);
    }

    /// Toggle orientation in place
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.toggled();
    }

    /// Drop the bottom cell of a vertical piece after its row was cleared.
    ///
    /// The origin moves up one row and the length shrinks by one. Callers only
    /// use this for vertical pieces longer than one cell.
    pub fn shrink_from_anchor(&mut self) {
        debug_assert!(self.length > 1);
        self.origin = self.origin.offset(0, -1);
        self.length = self.length.saturating_sub(1).max(1);
    }

    /// Topmost and bottommost rows covered
    pub fn row_span(&self) -> (i32, i32) {
        match self.orientation {
            Orientation::Horizontal => (self.origin.y, self.origin.y),
            Orientation::Vertical => (self.origin.y - (self.length as i32 - 1), self.origin.y),
        }
    }
}
