use crate::piece::Piece;
use crate::types::{Orientation, PlayState, Position, SCENE_HEIGHT, SCENE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub origin: Position,
    pub length: u8,
    pub orientation: Orientation,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            origin: value.origin,
            length: value.length,
            orientation: value.orientation,
        }
    }
}

impl PieceSnapshot {
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        Piece::new(self.origin, self.length, self.orientation)
            .occupied_cells()
            .into_iter()
    }
}

/// Render-ready copy of a Tetris game. `rows` holds one column mask per row,
/// ceiling first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TetrisSnapshot {
    pub width: u8,
    pub height: u8,
    pub rows: Vec<u64>,
    pub piece: Option<PieceSnapshot>,
    pub points: u32,
    pub rows_cleared: u32,
    pub status: PlayState,
    pub seed: u32,
}

impl TetrisSnapshot {
    pub fn clear(&mut self) {
        self.width = SCENE_WIDTH;
        self.height = SCENE_HEIGHT;
        self.rows.clear();
        self.rows.resize(SCENE_HEIGHT as usize, 0);
        self.piece = None;
        self.points = 0;
        self.rows_cleared = 0;
        self.status = PlayState::Idle;
        self.seed = 0;
    }

    /// True when the cell at `(x, y)` is settled
    pub fn is_settled(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 {
            return false;
        }
        self.rows
            .get(y as usize)
            .map_or(false, |mask| mask & (1u64 << x) != 0)
    }

    pub fn playable(&self) -> bool {
        self.status == PlayState::Running
    }
}

impl Default for TetrisSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            rows: Vec::with_capacity(SCENE_HEIGHT as usize),
            piece: None,
            points: 0,
            rows_cleared: 0,
            status: PlayState::Idle,
            seed: 0,
        };
        s.clear();
        s
    }
}
