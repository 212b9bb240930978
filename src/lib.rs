//! TUI Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the terminal
//! front end ([`app`]) shared by the `tui-arcade` binary and the integration
//! tests.

pub mod app;

pub use tui_arcade_adapter as adapter;
pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
