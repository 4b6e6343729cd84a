//! Auto-refresh task tests: delivery, failure events, shutdown.

use std::time::Duration;

use dashtop::api::{self, FetchError};
use dashtop::poller::{spawn_auto_refresh, spawn_health_check, PollEvent};
use serde_json::json;
use tokio::sync::mpsc::unbounded_channel;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn first_cycle_delivers_a_snapshot_promptly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "application": { "uptime_seconds": 12.0, "request_count": 2 }
        })))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let client = api::build_client(None).unwrap();
    let (tx, mut rx) = unbounded_channel();
    let handle = spawn_auto_refresh(client, base, Duration::from_secs(5), tx);

    let ev = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no event within 5s")
        .expect("channel closed");
    match ev {
        PollEvent::Stats { snapshot, raw } => {
            assert_eq!(snapshot.application.unwrap().request_count, Some(2));
            assert!(raw.contains("uptime_seconds"), "{raw}");
        }
        other => panic!("expected Stats, got {other:?}"),
    }
    handle.abort();
}

#[tokio::test]
async fn server_error_becomes_a_stats_error_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let client = api::build_client(None).unwrap();
    let (tx, mut rx) = unbounded_channel();
    let handle = spawn_auto_refresh(client, base, Duration::from_secs(5), tx);

    let ev = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no event within 5s")
        .expect("channel closed");
    assert!(
        matches!(ev, PollEvent::StatsError(FetchError::Status(500))),
        "got {ev:?}"
    );
    handle.abort();
}

#[tokio::test]
async fn poller_stops_once_the_receiver_is_gone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let client = api::build_client(None).unwrap();
    let (tx, rx) = unbounded_channel();
    let handle = spawn_auto_refresh(client, base, Duration::from_millis(10), tx);

    drop(rx);
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("poller did not stop after channel close")
        .expect("poller task panicked");
}

#[tokio::test]
async fn health_check_is_a_single_shot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let client = api::build_client(None).unwrap();
    let (tx, mut rx) = unbounded_channel();
    spawn_health_check(client, base, tx);

    let ev = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no event within 5s")
        .expect("channel closed");
    assert!(matches!(ev, PollEvent::Health(h) if h.status == "healthy"));
    assert!(rx.recv().await.is_none());
}
