//! Score adapter - fire-and-forget score submission over TCP
//!
//! When a game ends, its final score is sent to a score service. If the
//! service says the score qualifies, the player is asked for a name and the
//! `(score, name)` pair is recorded. Nothing the service says ever changes
//! game state.
//!
//! # Protocol
//!
//! Line-delimited JSON, one request and one response per connection. See
//! [`protocol`] for the message shapes.
//!
//! # Environment Variables
//!
//! - `ARCADE_SCORE_HOST`: service host (default: "127.0.0.1")
//! - `ARCADE_SCORE_PORT`: service port (default: 7878)
//! - `ARCADE_SCORE_TIMEOUT_MS`: per-request timeout (default: 2000)
//! - `ARCADE_SCORE_LOG_PATH`: append every message to this JSONL file
//! - `ARCADE_SCORE_DISABLED`: set to "1" or "true" to disable submission
//!
//! # Testing
//!
//! A throwaway service for manual testing:
//!
//! ```bash
//! while true; do echo '{"type":"verdict","qualifies":true}' | nc -l 7878; done
//! ```

pub mod config;
pub mod protocol;
pub mod reporter;

pub use tui_arcade_types as types;

pub use config::ScoreConfig;
pub use protocol::{Request, Response, WireGame, WireRecord, WireScore};
pub use reporter::{exchange, Qualified, ScoreReporter, ScoreSubmitter};
