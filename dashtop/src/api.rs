//! Minimal HTTP helpers for fetching the stats and health documents.

use std::{fs, path::Path};

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::types::{HealthStatus, StatsSnapshot};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bad endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Build the shared HTTP client, optionally trusting a custom CA for https
/// endpoints. No request timeout: a slow cycle overlaps the next one instead
/// of being cancelled.
pub fn build_client(tls_ca: Option<&Path>) -> anyhow::Result<Client> {
    let mut builder = Client::builder();
    if let Some(path) = tls_ca {
        let pem = fs::read(path)?;
        builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
    }
    Ok(builder.build()?)
}

// GET {base}/api/stats; any non-2xx status is a failure. Returns the parsed
// snapshot together with the raw body, which the clipboard copy hands out.
pub async fn fetch_stats(
    client: &Client,
    base: &Url,
) -> Result<(StatsSnapshot, String), FetchError> {
    let url = base.join("api/stats")?;
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = resp.text().await?;
    let snapshot = serde_json::from_str(&body)?;
    Ok((snapshot, body))
}

// GET {base}/health; the body is parsed regardless of HTTP status because the
// server answers 503 with a JSON body when unhealthy.
pub async fn fetch_health(client: &Client, base: &Url) -> Result<HealthStatus, FetchError> {
    let url = base.join("health")?;
    let resp = client.get(url).send().await?;
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
