//! Game loop module - scheduler capability, game seam and session
//!
//! The loop is single-threaded and cooperative: ticks never overlap and input
//! is applied between ticks. [`Session`] wires a game implementing
//! [`ArcadeGame`] to a [`Scheduler`] and an optional score sink.
//!
//! ```
//! use tui_arcade_core::{TetrisConfig, TetrisGame};
//! use tui_arcade_engine::{ManualScheduler, Scheduler, Session, Step};
//!
//! let game = TetrisGame::new(TetrisConfig::default(), 7).unwrap();
//! let mut session = Session::new(game, ManualScheduler::new());
//!
//! assert_eq!(session.on_tick(), Step::Ignored); // not started
//! session.start();
//! assert!(session.scheduler().is_running());
//! assert_eq!(session.on_tick(), Step::Advanced);
//! ```

pub mod game;
pub mod scheduler;
pub mod session;

pub use game::{ArcadeGame, Step};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, SchedulerCall};
pub use session::Session;
