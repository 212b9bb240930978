use std::env;
use std::time::Duration;

/// Where scores are sent and how the adapter behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreConfig {
    pub host: String,
    pub port: u16,
    /// Per-request time limit (connect, write, read)
    pub timeout: Duration,
    /// Append every request and response as one JSON line
    pub log_path: Option<String>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            timeout: Duration::from_millis(2000),
            log_path: None,
        }
    }
}

impl ScoreConfig {
    /// `ARCADE_SCORE_HOST`, `ARCADE_SCORE_PORT`, `ARCADE_SCORE_TIMEOUT_MS` and
    /// `ARCADE_SCORE_LOG_PATH`; anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("ARCADE_SCORE_HOST")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);
        let port = env::var("ARCADE_SCORE_PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);
        let timeout = env::var("ARCADE_SCORE_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);
        let log_path = env::var("ARCADE_SCORE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            timeout,
            log_path,
        }
    }

    /// `ARCADE_SCORE_DISABLED=1` (or `true`) turns submission off.
    pub fn is_disabled() -> bool {
        env::var("ARCADE_SCORE_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
