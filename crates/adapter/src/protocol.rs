//! Score service messages: one JSON object per line.
//!
//! ```text
//! -> {"type":"check","game":"tetris","score":{"points":120}}
//! <- {"type":"verdict","qualifies":true}
//! -> {"type":"record","game":"minesweeper","score":{"elapsed":{"minutes":1,"seconds":5}},"name":"ann"}
//! <- {"type":"ack"}
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{FinalScore, GameKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireGame {
    Tetris,
    Snake,
    Minesweeper,
}

impl From<GameKind> for WireGame {
    fn from(value: GameKind) -> Self {
        match value {
            GameKind::Tetris => WireGame::Tetris,
            GameKind::Snake => WireGame::Snake,
            GameKind::Minesweeper => WireGame::Minesweeper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireElapsed {
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireScore {
    Points(u32),
    Elapsed(WireElapsed),
}

impl From<FinalScore> for WireScore {
    fn from(value: FinalScore) -> Self {
        match value {
            FinalScore::Points(p) => WireScore::Points(p),
            FinalScore::Elapsed { minutes, seconds } => {
                WireScore::Elapsed(WireElapsed { minutes, seconds })
            }
        }
    }
}

/// Game -> score service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    Check {
        game: WireGame,
        score: WireScore,
    },
    Record {
        game: WireGame,
        score: WireScore,
        name: String,
    },
}

impl Request {
    pub fn check(game: GameKind, score: FinalScore) -> Self {
        Request::Check {
            game: game.into(),
            score: score.into(),
        }
    }

    pub fn record(game: GameKind, score: FinalScore, name: impl Into<String>) -> Self {
        Request::Record {
            game: game.into(),
            score: score.into(),
            name: name.into(),
        }
    }
}

/// Score service -> game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    Verdict { qualifies: bool },
    Ack,
    Error { message: String },
}

/// One entry of the optional JSONL wire log
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "dir", content = "msg", rename_all = "lowercase")]
pub enum WireRecord {
    Out(Request),
    In(Response),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_request_shape() {
        let req = Request::check(GameKind::Tetris, FinalScore::Points(120));
        let line = serde_json::to_string(&req).unwrap();
        assert_eq!(
            line,
            r#"{"type":"check","game":"tetris","score":{"points":120}}"#
        );
    }

    #[test]
    fn record_request_carries_elapsed_time() {
        let score = FinalScore::Elapsed {
            minutes: 1,
            seconds: 5,
        };
        let req = Request::record(GameKind::Minesweeper, score, "ann");
        let line = serde_json::to_string(&req).unwrap();
        assert_eq!(
            line,
            r#"{"type":"record","game":"minesweeper","score":{"elapsed":{"minutes":1,"seconds":5}},"name":"ann"}"#
        );
    }

    #[test]
    fn parses_responses() {
        let verdict: Response = serde_json::from_str(r#"{"type":"verdict","qualifies":true}"#).unwrap();
        assert_eq!(verdict, Response::Verdict { qualifies: true });

        let ack: Response = serde_json::from_str(r#"{"type":"ack"}"#).unwrap();
        assert_eq!(ack, Response::Ack);

        assert!(serde_json::from_str::<Response>(r#"{"type":"nope"}"#).is_err());
    }

    #[test]
    fn wire_record_tags_direction() {
        let rec = WireRecord::In(Response::Ack);
        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"{"dir":"in","msg":{"type":"ack"}}"#
        );
    }
}
