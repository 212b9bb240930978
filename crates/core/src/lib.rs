//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of all three games. It has **no dependencies**
//! on terminals, timers or networking:
//!
//! - **Deterministic**: every game is built from a seed, so a seed replays a game
//! - **Testable**: tick and input are plain method calls returning events
//! - **Allocation-light**: piece cells live on the stack, landscape rows are bitmasks
//!
//! # Module Structure
//!
//! - [`landscape`]: settled Tetris cells, one `u64` column mask per row
//! - [`piece`]: the falling straight piece and its derived cells
//! - [`oracle`]: pure legality predicates (moves, rotation, resting, ceiling, completion)
//! - [`cascade`]: row clearing with worklist-driven settling
//! - [`tetris`]: the Tetris state machine
//! - [`minesweeper`]: mine placement, flood-fill reveal, flags, clock
//! - [`snake`]: snake body, fruit and collision
//! - [`rng`]: seeded LCG and sampling without replacement
//! - [`config`]: validated per-game configuration
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{TetrisConfig, TetrisGame, TickEvent};
//! use tui_arcade_types::TetrisAction;
//!
//! let mut game = TetrisGame::new(TetrisConfig::default(), 12345).unwrap();
//! game.start();
//!
//! game.apply_action(TetrisAction::MoveLeft);
//! assert_eq!(game.tick(), TickEvent::Fell);
//! ```

pub mod cascade;
pub mod config;
pub mod landscape;
pub mod minesweeper;
pub mod oracle;
pub mod piece;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod tetris;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use cascade::CascadeReport;
pub use config::{MinesweeperConfig, SnakeConfig, TetrisConfig};
pub use landscape::{Landscape, Scene};
pub use minesweeper::{BoardEvent, Cell, CellState, Clock, MinesweeperGame, Outcome};
pub use piece::{Piece, PieceCells};
pub use rng::{sample_without_replacement, SimpleRng};
pub use snake::{SnakeEvent, SnakeGame};
pub use snapshot::{PieceSnapshot, TetrisSnapshot};
pub use tetris::{TetrisGame, TickEvent};
