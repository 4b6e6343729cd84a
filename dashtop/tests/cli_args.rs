//! CLI arg parsing and --once mode tests for dashtop.

use assert_cmd::Command;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run(args: &[&str]) -> std::process::Output {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::new(env!("CARGO_BIN_EXE_dashtop"))
        .env("XDG_CONFIG_HOME", dir.path())
        .args(args)
        .output()
        .expect("run dashtop")
}

fn combined(out: &std::process::Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
}

#[test]
fn help_mentions_short_and_long_flags() {
    let out = run(&["--help"]);
    let text = combined(&out);
    assert!(
        text.contains("--tls-ca")
            && text.contains("-t")
            && text.contains("--profile")
            && text.contains("-P")
            && text.contains("--interval")
            && text.contains("--no-refresh")
            && text.contains("--once"),
        "help text missing expected flags\n{text}"
    );
}

#[test]
fn unexpected_argument_prints_usage() {
    let out = run(&["http://localhost:8080", "extra-arg"]);
    let text = combined(&out);
    assert!(text.contains("Usage:"), "{text}");
}

#[test]
fn zero_interval_is_rejected() {
    let out = run(&["--interval", "0", "http://localhost:8080"]);
    let text = combined(&out);
    assert!(text.contains("positive number of seconds"), "{text}");
}

#[test]
fn non_http_url_is_rejected() {
    let out = run(&["--once", "ws://localhost:8080"]);
    assert!(!out.status.success());
    let text = combined(&out);
    assert!(text.contains("http(s)"), "{text}");
}

#[tokio::test]
async fn once_mode_prints_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "application": { "uptime_seconds": 125.9, "request_count": 42 },
            "system": { "cpu_percent": 10.0, "memory_percent": 70.0, "disk_percent": 85.5 }
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let out = tokio::task::spawn_blocking(move || run(&["--once", uri.as_str()]))
        .await
        .unwrap();
    assert!(out.status.success(), "{}", combined(&out));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("uptime:   2m 5s"), "{stdout}");
    assert!(stdout.contains("requests: 42"), "{stdout}");
    assert!(stdout.contains("cpu:      10.0%"), "{stdout}");
    assert!(stdout.contains("disk:     85.5%"), "{stdout}");
}

#[tokio::test]
async fn once_mode_fails_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    let out = tokio::task::spawn_blocking(move || run(&["--once", uri.as_str()]))
        .await
        .unwrap();
    assert!(!out.status.success());
    let text = combined(&out);
    assert!(text.contains("HTTP 500"), "{text}");
}
