//! Bridges the synchronous game loop with the async score service client.
//!
//! Submissions are spawned onto a private tokio runtime and never block the
//! caller. A score the service accepts comes back through
//! [`ScoreReporter::poll_qualified`] so the loop can ask for a name.

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::mpsc;

use crate::config::ScoreConfig;
use crate::protocol::{Request, Response, WireRecord};
use crate::types::{FinalScore, GameKind, ScoreSink};

/// A final score the service wants a name for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualified {
    pub game: GameKind,
    pub score: FinalScore,
}

type WireLog = Option<mpsc::UnboundedSender<WireRecord>>;

/// Send one request over a fresh connection and read one response line.
pub async fn exchange(addr: &str, request: &Request, log: &WireLog) -> Result<Response> {
    let mut stream = TcpStream::connect(addr).await?;

    let mut line = serde_json::to_vec(request)?;
    line.push(b'\n');
    stream.write_all(&line).await?;
    stream.flush().await?;
    if let Some(tx) = log {
        let _ = tx.send(WireRecord::Out(request.clone()));
    }

    let (read, _write) = stream.split();
    let mut reader = BufReader::new(read);
    let mut reply = String::new();
    if reader.read_line(&mut reply).await? == 0 {
        return Err(anyhow!("connection closed before a response"));
    }
    let response: Response = serde_json::from_str(reply.trim_end())?;
    if let Some(tx) = log {
        let _ = tx.send(WireRecord::In(response.clone()));
    }
    Ok(response)
}

/// Append each record as one JSON line to `path`.
fn spawn_wire_log(rt: &Runtime, path: String) -> mpsc::UnboundedSender<WireRecord> {
    let (tx, mut rx) = mpsc::unbounded_channel::<WireRecord>();
    rt.spawn(async move {
        use tokio::fs::OpenOptions;

        let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
            Ok(f) => f,
            Err(e) => {
                eprintln!("[Scores] cannot open wire log {}: {}", path, e);
                return;
            }
        };

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        while let Some(rec) = rx.recv().await {
            buf.clear();
            if serde_json::to_writer(&mut buf, &rec).is_err() {
                continue;
            }
            buf.push(b'\n');
            if file.write_all(&buf).await.is_err() {
                break;
            }
        }
        let _ = file.flush().await;
    });
    tx
}

/// Cloneable submission handle; this is what a game session owns as its sink.
#[derive(Clone)]
pub struct ScoreSubmitter {
    handle: Handle,
    config: ScoreConfig,
    qualified_tx: mpsc::UnboundedSender<Qualified>,
    wire_log: WireLog,
}

impl ScoreSubmitter {
    fn spawn_request(&self, request: Request, on_reply: impl FnOnce(Response) + Send + 'static) {
        let addr = self.config.addr();
        let timeout = self.config.timeout;
        let log = self.wire_log.clone();
        self.handle.spawn(async move {
            match tokio::time::timeout(timeout, exchange(&addr, &request, &log)).await {
                Ok(Ok(Response::Error { message })) => {
                    eprintln!("[Scores] service rejected request: {}", message);
                }
                Ok(Ok(response)) => on_reply(response),
                Ok(Err(e)) => eprintln!("[Scores] request to {} failed: {}", addr, e),
                Err(_) => eprintln!("[Scores] request to {} timed out", addr),
            }
        });
    }

    /// Ask the service whether `score` qualifies.
    pub fn check(&self, game: GameKind, score: FinalScore) {
        let tx = self.qualified_tx.clone();
        self.spawn_request(Request::check(game, score), move |response| {
            if response == (Response::Verdict { qualifies: true }) {
                let _ = tx.send(Qualified { game, score });
            }
        });
    }

    /// Forward `(score, name)` for a qualified score.
    pub fn submit_record(&self, qualified: Qualified, name: &str) {
        let request = Request::record(qualified.game, qualified.score, name);
        self.spawn_request(request, move |response| {
            if response != Response::Ack {
                eprintln!("[Scores] unexpected reply to record: {:?}", response);
            }
        });
    }
}

impl ScoreSink for ScoreSubmitter {
    fn submit(&mut self, game: GameKind, score: FinalScore) {
        self.check(game, score);
    }
}

/// Running score reporter: owns the runtime and the qualified-score queue.
pub struct ScoreReporter {
    _rt: Runtime,
    submitter: ScoreSubmitter,
    qualified_rx: mpsc::UnboundedReceiver<Qualified>,
}

impl ScoreReporter {
    /// Start from environment variables. Returns `None` when
    /// `ARCADE_SCORE_DISABLED` is set or the runtime cannot start.
    pub fn start_from_env() -> Option<Self> {
        if ScoreConfig::is_disabled() {
            eprintln!("[Scores] submission disabled via ARCADE_SCORE_DISABLED");
            return None;
        }
        match Self::start(ScoreConfig::from_env()) {
            Ok(reporter) => Some(reporter),
            Err(e) => {
                eprintln!("[Scores] failed to start: {}", e);
                None
            }
        }
    }

    pub fn start(config: ScoreConfig) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("arcade-scores")
            .enable_all()
            .build()?;
        let wire_log = config.log_path.clone().map(|path| spawn_wire_log(&rt, path));
        eprintln!("[Scores] submitting final scores to {}", config.addr());
        let (qualified_tx, qualified_rx) = mpsc::unbounded_channel();
        let submitter = ScoreSubmitter {
            handle: rt.handle().clone(),
            config,
            qualified_tx,
            wire_log,
        };

        Ok(Self {
            _rt: rt,
            submitter,
            qualified_rx,
        })
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.submitter.config
    }

    pub fn submitter(&self) -> ScoreSubmitter {
        self.submitter.clone()
    }

    pub fn submit_record(&self, qualified: Qualified, name: &str) {
        self.submitter.submit_record(qualified, name);
    }

    /// Non-blocking: the next score that qualified, if any.
    pub fn poll_qualified(&mut self) -> Option<Qualified> {
        self.qualified_rx.try_recv().ok()
    }
}

impl ScoreSink for ScoreReporter {
    fn submit(&mut self, game: GameKind, score: FinalScore) {
        self.submitter.check(game, score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader as StdBufReader, Write};
    use std::net::TcpListener as StdTcpListener;
    use std::time::{Duration, Instant};

    /// Blocking one-shot service: answers every line with `reply`.
    fn serve_once(reply: &'static str) -> (u16, std::thread::JoinHandle<String>) {
        let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = StdBufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let mut stream = stream;
            stream.write_all(reply.as_bytes()).unwrap();
            stream.write_all(b"\n").unwrap();
            line
        });
        (port, handle)
    }

    fn wait_for_qualified(reporter: &mut ScoreReporter) -> Option<Qualified> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(q) = reporter.poll_qualified() {
                return Some(q);
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn qualifying_score_is_reported_back() {
        let (port, server) = serve_once(r#"{"type":"verdict","qualifies":true}"#);
        let config = ScoreConfig {
            port,
            ..ScoreConfig::default()
        };
        let mut reporter = ScoreReporter::start(config).unwrap();
        reporter.submit(GameKind::Snake, FinalScore::Points(40));

        let q = wait_for_qualified(&mut reporter).expect("qualified score");
        assert_eq!(q.game, GameKind::Snake);
        assert_eq!(q.score, FinalScore::Points(40));

        let sent = server.join().unwrap();
        assert!(sent.contains(r#""type":"check""#));
        assert!(sent.contains(r#""game":"snake""#));
    }

    #[test]
    fn unreachable_service_is_silent() {
        // Bind then drop to get a port with nothing listening.
        let port = StdTcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = ScoreConfig {
            port,
            timeout: Duration::from_millis(200),
            ..ScoreConfig::default()
        };
        let mut reporter = ScoreReporter::start(config).unwrap();
        reporter.submit(GameKind::Tetris, FinalScore::Points(10));
        std::thread::sleep(Duration::from_millis(300));
        assert_eq!(reporter.poll_qualified(), None);
    }
}
