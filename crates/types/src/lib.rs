//! Shared types module - value types and constants for all three games
//!
//! Everything here is plain data with no external dependencies, usable from
//! core logic, the terminal renderer and the score adapter alike.
//!
//! # Scene Dimensions
//!
//! | Game | Grid | Notes |
//! |------|------|-------|
//! | Tetris | 10 x 10 cells | row 0 is the ceiling, row 9 the floor |
//! | Minesweeper | 10 x 10 cells | 15 mines |
//! | Snake | 180 x 180 units | one move = 6 units |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TETRIS_INITIAL_TICK_MS` | 400 | Gravity period at game start |
//! | `SNAKE_INITIAL_TICK_MS` | 100 | Snake step period at game start |
//! | `MINESWEEPER_CLOCK_MS` | 1000 | Minesweeper clock resolution |
//! | `TICK_SPEEDUP_RATIO` | 0.02 | Period shrink after a row clear / fruit |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Orientation, Position, Direction};
//!
//! let p = Position::new(3, 4);
//! assert_eq!(p.offset(1, -1), Position::new(4, 3));
//! assert_eq!(p.to_index(10), Some(43));
//!
//! assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! ```

use std::fmt;

/// Tetris scene width in cells (10 columns)
pub const SCENE_WIDTH: u8 = 10;

/// Tetris scene height in cells (10 rows)
pub const SCENE_HEIGHT: u8 = 10;

/// Longest piece the random generator spawns
pub const MAX_PIECE_LENGTH: u8 = 4;

/// Hard upper bound for `max_piece_length` (fixed piece cell storage).
pub const PIECE_CAPACITY: usize = 8;

/// Widest scene a landscape row mask can hold.
pub const MAX_SCENE_WIDTH: u8 = 64;

/// Gravity period at the start of a Tetris game (400ms per row)
pub const TETRIS_INITIAL_TICK_MS: u32 = 400;

/// Fraction of the current period removed after a row clear or an eaten fruit.
pub const TICK_SPEEDUP_RATIO: f64 = 0.02;

/// Flat bonus for one completed row (one point per column).
pub const POINTS_FOR_FULL_ROW: u32 = SCENE_WIDTH as u32;

/// Minesweeper grid rows
pub const MINESWEEPER_ROWS: u8 = 10;

/// Minesweeper grid columns
pub const MINESWEEPER_COLS: u8 = 10;

/// Mines placed on a Minesweeper grid
pub const MINESWEEPER_MINES: u16 = 15;

/// Minesweeper clock period (one second)
pub const MINESWEEPER_CLOCK_MS: u32 = 1000;

/// Snake scene width in scene units
pub const SNAKE_SCENE_WIDTH: i32 = 180;

/// Snake scene height in scene units
pub const SNAKE_SCENE_HEIGHT: i32 = 180;

/// Radius of a snake body segment
pub const SNAKE_HEAD_RADIUS: i32 = 3;

/// Radius of the fruit
pub const SNAKE_FRUIT_RADIUS: i32 = 4;

/// Snake step period at the start of a game (100ms)
pub const SNAKE_INITIAL_TICK_MS: u32 = 100;

/// Points for one eaten fruit
pub const SNAKE_POINTS_PER_FRUIT: u32 = 10;

/// Integer grid (or scene-unit) coordinate.
///
/// `x` grows to the right, `y` grows downward: `y == 0` is the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Map pointer coordinates (relative to the play area) to a grid cell.
    pub fn from_screen(px: u32, py: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            x: (px / cell_size) as i32,
            y: (py / cell_size) as i32,
        }
    }

    /// Flat row-major index (`y * cols + x`), `None` when x is outside `0..cols`
    /// or y is negative.
    pub fn to_index(self, cols: usize) -> Option<usize> {
        if self.x < 0 || self.y < 0 || self.x as usize >= cols {
            return None;
        }
        Some(self.y as usize * cols + self.x as usize)
    }
}

/// Orientation of a falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cells extend to the right of the origin
    Horizontal,
    /// Cells extend upward from the origin (the origin is the bottom cell)
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Lifecycle shared by every game: `Idle -> Running -> Ended -> (reset) Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    #[default]
    Idle,
    Running,
    Ended,
}

impl PlayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayState::Idle => "idle",
            PlayState::Running => "running",
            PlayState::Ended => "ended",
        }
    }
}

/// Which game a score or session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Tetris,
    Snake,
    Minesweeper,
}

impl GameKind {
    /// Parse game kind from string (case-insensitive)
    ///
    /// ```
    /// use tui_arcade_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("Tetris"), Some(GameKind::Tetris));
    /// assert_eq!(GameKind::from_str("pong"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tetris" => Some(GameKind::Tetris),
            "snake" => Some(GameKind::Snake),
            "minesweeper" => Some(GameKind::Minesweeper),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Tetris => "tetris",
            GameKind::Snake => "snake",
            GameKind::Minesweeper => "minesweeper",
        }
    }
}

/// Player requests for the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisAction {
    MoveLeft,
    MoveRight,
    /// Toggle orientation around the origin
    Rotate,
    /// Run one gravity step immediately
    SoftDrop,
}

/// Player requests on the Minesweeper grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinesweeperAction {
    Reveal(Position),
    ToggleFlag(Position),
}

/// Final result handed to the score sink when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalScore {
    /// Tetris and Snake
    Points(u32),
    /// Minesweeper win time
    Elapsed { minutes: u32, seconds: u32 },
}

impl FinalScore {
    /// `MM:SS` for elapsed times, the bare number for points.
    pub fn display(&self) -> String {
        match self {
            FinalScore::Points(p) => p.to_string(),
            FinalScore::Elapsed { minutes, seconds } => format!("{:02}:{:02}", minutes, seconds),
        }
    }
}

/// Receiver for final scores. Submission is fire-and-forget: nothing flows back
/// into game state.
pub trait ScoreSink {
    fn submit(&mut self, game: GameKind, score: FinalScore);
}

/// Rejected game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyScene,
    SceneTooWide,
    PieceLengthOutOfRange,
    TooManyMines,
    ZeroPeriod,
    SnakeSceneTooSmall,
}

impl ConfigError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigError::EmptyScene => "empty_scene",
            ConfigError::SceneTooWide => "scene_too_wide",
            ConfigError::PieceLengthOutOfRange => "piece_length_out_of_range",
            ConfigError::TooManyMines => "too_many_mines",
            ConfigError::ZeroPeriod => "zero_period",
            ConfigError::SnakeSceneTooSmall => "snake_scene_too_small",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfigError::EmptyScene => "scene must have at least one row and one column",
            ConfigError::SceneTooWide => "scene width must not exceed 64 columns",
            ConfigError::PieceLengthOutOfRange => {
                "max piece length must be between 1 and the scene width (and at most 8)"
            }
            ConfigError::TooManyMines => "mine count must be smaller than the number of cells",
            ConfigError::ZeroPeriod => "tick period must be positive",
            ConfigError::SnakeSceneTooSmall => "snake scene must fit the head and the fruit",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.as_str())
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_and_timing_defaults() {
        assert_eq!(POINTS_FOR_FULL_ROW, 10);
        assert_eq!(TETRIS_INITIAL_TICK_MS, 400);
        assert_eq!(SNAKE_INITIAL_TICK_MS, 100);
        assert_eq!(MINESWEEPER_CLOCK_MS, 1000);
        assert!((TICK_SPEEDUP_RATIO - 0.02).abs() < f64::EPSILON);
        assert!(MAX_PIECE_LENGTH as usize <= PIECE_CAPACITY);
    }

    #[test]
    fn position_from_screen_uses_integer_division() {
        assert_eq!(Position::from_screen(0, 0, 30), Position::new(0, 0));
        assert_eq!(Position::from_screen(29, 59, 30), Position::new(0, 1));
        assert_eq!(Position::from_screen(30, 60, 30), Position::new(1, 2));
    }

    #[test]
    fn position_to_index_rejects_out_of_range() {
        assert_eq!(Position::new(-1, 0).to_index(10), None);
        assert_eq!(Position::new(10, 0).to_index(10), None);
        assert_eq!(Position::new(9, 9).to_index(10), Some(99));
    }

    #[test]
    fn config_error_codes() {
        let err = ConfigError::SceneTooWide;
        assert_eq!(err.as_str(), "scene_too_wide");
        assert!(err.to_string().contains("64"));
    }
}
