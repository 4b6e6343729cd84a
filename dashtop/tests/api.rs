//! HTTP fetch tests against a stub server.

use dashtop::api::{self, FetchError};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn stub_server() -> (MockServer, Url) {
    let server = MockServer::start().await;
    let base = Url::parse(&server.uri()).expect("server uri");
    (server, base)
}

#[tokio::test]
async fn stats_success_parses_snapshot() {
    let (server, base) = stub_server().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "application": {
                "uptime_seconds": 3700.2,
                "request_count": 18,
                "version": "dev",
                "environment": "development"
            },
            "system": {
                "cpu_percent": 7.5,
                "memory_percent": 61.2,
                "disk_percent": 82.9,
                "load_average": [0.1, 0.2, 0.3]
            },
            "timestamp": "2026-08-27T09:00:00.123456"
        })))
        .mount(&server)
        .await;

    let client = api::build_client(None).expect("client");
    let (snap, raw) = api::fetch_stats(&client, &base).await.expect("fetch");

    let app = snap.application.expect("application");
    assert_eq!(app.request_count, Some(18));
    assert_eq!(app.version.as_deref(), Some("dev"));
    let sys = snap.system.expect("system");
    assert_eq!(sys.memory_percent, Some(61.2));
    assert!(snap.timestamp.is_some());
    // raw body travels alongside the parsed snapshot
    assert!(raw.contains("\"request_count\""), "{raw}");
}

#[tokio::test]
async fn stats_non_2xx_is_a_status_error() {
    let (server, base) = stub_server().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let client = api::build_client(None).expect("client");
    let err = api::fetch_stats(&client, &base).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)), "got {err:?}");
}

#[tokio::test]
async fn stats_bad_json_is_a_parse_error() {
    let (server, base) = stub_server().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = api::build_client(None).expect("client");
    let err = api::fetch_stats(&client, &base).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn health_body_parses_even_on_503() {
    let (server, base) = stub_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status": "unhealthy",
            "error": "disk on fire"
        })))
        .mount(&server)
        .await;

    let client = api::build_client(None).expect("client");
    let health = api::fetch_health(&client, &base).await.expect("health");
    assert_eq!(health.status, "unhealthy");
    assert_eq!(health.error.as_deref(), Some("disk on fire"));
}

#[tokio::test]
async fn health_status_string_passes_through_unvalidated() {
    let (server, base) = stub_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "bogus",
            "warnings": ["High CPU usage: 97.0%"]
        })))
        .mount(&server)
        .await;

    let client = api::build_client(None).expect("client");
    let health = api::fetch_health(&client, &base).await.expect("health");
    assert_eq!(health.status, "bogus");
    assert_eq!(health.warnings.len(), 1);
}
