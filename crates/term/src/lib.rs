//! Terminal game renderer.
//!
//! Views render game state into a plain framebuffer; [`TerminalRenderer`]
//! flushes it to the terminal, emitting only the cells that changed. Board
//! cells are two columns wide to roughly square up terminal glyphs.
//!
//! Views never touch game state mutably and do no I/O.

pub mod fb;
pub mod frame;
pub mod minesweeper_view;
pub mod prompt;
pub mod renderer;
pub mod snake_view;
pub mod tetris_view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame::{AnchorY, BoardFrame, Viewport};
pub use minesweeper_view::{MinesweeperView, LOST_MESSAGE, WON_MESSAGE};
pub use prompt::draw_name_prompt;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tetris_view::TetrisView;
