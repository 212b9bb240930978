//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into per-game commands. Nothing here
//! touches game state: the runner forwards commands to its session, which
//! ignores play input unless the game is running.

pub mod map;
pub mod pointer;
pub mod text;

pub use tui_arcade_types as types;

pub use map::{direction_key, minesweeper_key, should_quit, snake_key, tetris_key, Command};
pub use pointer::{mouse_action, GridArea, GridCursor, CELL_COLUMNS};
pub use text::{EntryEvent, NameEntry, NAME_MAX_LEN};
