//! Per-game configuration with validation.
//!
//! Defaults mirror the constants in the types crate; `validate` is called by
//! each game's constructor so an invalid config never reaches the game logic.

use crate::types::*;

/// Tetris scene and pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TetrisConfig {
    pub width: u8,
    pub height: u8,
    pub max_piece_length: u8,
    pub points_for_full_row: u32,
    pub initial_tick_ms: u32,
    pub speedup_ratio: f64,
}

impl Default for TetrisConfig {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            max_piece_length: MAX_PIECE_LENGTH,
            points_for_full_row: POINTS_FOR_FULL_ROW,
            initial_tick_ms: TETRIS_INITIAL_TICK_MS,
            speedup_ratio: TICK_SPEEDUP_RATIO,
        }
    }
}

impl TetrisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScene);
        }
        if self.width > MAX_SCENE_WIDTH {
            return Err(ConfigError::SceneTooWide);
        }
        if self.max_piece_length == 0
            || self.max_piece_length > self.width
            || self.max_piece_length as usize > PIECE_CAPACITY
        {
            return Err(ConfigError::PieceLengthOutOfRange);
        }
        if self.initial_tick_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

/// Minesweeper grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinesweeperConfig {
    pub rows: u8,
    pub cols: u8,
    pub mines: u16,
}

impl Default for MinesweeperConfig {
    fn default() -> Self {
        Self {
            rows: MINESWEEPER_ROWS,
            cols: MINESWEEPER_COLS,
            mines: MINESWEEPER_MINES,
        }
    }
}

impl MinesweeperConfig {
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Safe cells a player has to reveal to win.
    pub fn cells_to_reveal(&self) -> usize {
        self.cell_count() - self.mines as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyScene);
        }
        if self.mines as usize >= self.cell_count() {
            return Err(ConfigError::TooManyMines);
        }
        Ok(())
    }
}

/// Snake scene in abstract units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeConfig {
    pub width: i32,
    pub height: i32,
    pub head_radius: i32,
    pub fruit_radius: i32,
    pub points_per_fruit: u32,
    pub initial_tick_ms: u32,
    pub speedup_ratio: f64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: SNAKE_SCENE_WIDTH,
            height: SNAKE_SCENE_HEIGHT,
            head_radius: SNAKE_HEAD_RADIUS,
            fruit_radius: SNAKE_FRUIT_RADIUS,
            points_per_fruit: SNAKE_POINTS_PER_FRUIT,
            initial_tick_ms: SNAKE_INITIAL_TICK_MS,
            speedup_ratio: TICK_SPEEDUP_RATIO,
        }
    }
}

impl SnakeConfig {
    /// Distance covered by one move (one body diameter).
    pub fn step(&self) -> i32 {
        2 * self.head_radius
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.head_radius <= 0 || self.fruit_radius <= 0 {
            return Err(ConfigError::SnakeSceneTooSmall);
        }
        let min_side = 2 * self.fruit_radius.max(self.head_radius) + 1;
        if self.width < min_side || self.height < min_side {
            return Err(ConfigError::SnakeSceneTooSmall);
        }
        if self.initial_tick_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}
