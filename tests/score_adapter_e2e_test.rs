use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use tui_arcade::adapter::{exchange, Request, Response, WireRecord};
use tui_arcade::types::{FinalScore, GameKind};

/// One-shot score service: reads a request line, answers with `reply`, and
/// hands the parsed request back to the test.
async fn serve_once(reply: &'static str) -> (String, tokio::task::JoinHandle<serde_json::Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut lines = BufReader::new(read_half).lines();
        let line = lines.next_line().await.unwrap().expect("expected request line");

        if !reply.is_empty() {
            write_half.write_all(reply.as_bytes()).await.unwrap();
            write_half.write_all(b"\n").await.unwrap();
            write_half.flush().await.unwrap();
        }
        serde_json::from_str(&line).unwrap()
    });

    (addr, handle)
}

#[tokio::test]
async fn check_then_record_round_trip() {
    let (addr, service) = serve_once(r#"{"type":"verdict","qualifies":true}"#).await;
    let (log_tx, mut log_rx) = mpsc::unbounded_channel::<WireRecord>();
    let log = Some(log_tx);

    let check = Request::check(GameKind::Tetris, FinalScore::Points(120));
    let response = tokio::time::timeout(Duration::from_secs(2), exchange(&addr, &check, &log))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(response, Response::Verdict { qualifies: true });

    let seen = service.await.unwrap();
    assert_eq!(seen["type"], "check");
    assert_eq!(seen["game"], "tetris");
    assert_eq!(seen["score"]["points"], 120);

    // Both directions reach the wire log, outbound first.
    match log_rx.recv().await {
        Some(WireRecord::Out(req)) => assert_eq!(req, check),
        other => panic!("expected outbound record, got {:?}", other),
    }
    match log_rx.recv().await {
        Some(WireRecord::In(resp)) => assert_eq!(resp, Response::Verdict { qualifies: true }),
        other => panic!("expected inbound record, got {:?}", other),
    }

    let (addr, service) = serve_once(r#"{"type":"ack"}"#).await;
    let elapsed = FinalScore::Elapsed {
        minutes: 1,
        seconds: 5,
    };
    let record = Request::record(GameKind::Minesweeper, elapsed, "ann");
    let response = exchange(&addr, &record, &None).await.unwrap();
    assert_eq!(response, Response::Ack);

    let seen = service.await.unwrap();
    assert_eq!(seen["type"], "record");
    assert_eq!(seen["name"], "ann");
    assert_eq!(seen["score"]["elapsed"]["minutes"], 1);
    assert_eq!(seen["score"]["elapsed"]["seconds"], 5);
}

#[tokio::test]
async fn service_error_is_a_response_not_a_failure() {
    let (addr, service) = serve_once(r#"{"type":"error","message":"board full"}"#).await;
    let request = Request::check(GameKind::Snake, FinalScore::Points(40));
    let response = exchange(&addr, &request, &None).await.unwrap();
    assert_eq!(
        response,
        Response::Error {
            message: "board full".to_string()
        }
    );
    service.await.unwrap();
}

#[tokio::test]
async fn closed_connection_without_reply_is_an_error() {
    let (addr, service) = serve_once("").await;
    let request = Request::check(GameKind::Snake, FinalScore::Points(10));
    let result = exchange(&addr, &request, &None).await;
    service.await.unwrap();
    assert!(result.is_err());
}

#[tokio::test]
async fn unreachable_service_fails_fast() {
    // Bind and drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let request = Request::check(GameKind::Tetris, FinalScore::Points(0));
    let result = tokio::time::timeout(Duration::from_secs(2), exchange(&addr, &request, &None))
        .await
        .unwrap();
    assert!(result.is_err());
}
