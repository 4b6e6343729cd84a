//! Types that mirror the demo app's JSON schema.

use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApplicationStats {
    pub uptime_seconds: Option<f64>,
    pub request_count: Option<u64>,
    pub version: Option<String>,
    pub environment: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SystemStats {
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub disk_percent: Option<f64>,
    pub load_average: Option<Vec<f64>>,
}

// Every field is optional: a partial document skips the missing
// projections instead of failing the whole fetch.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatsSnapshot {
    pub application: Option<ApplicationStats>,
    pub system: Option<SystemStats>,
    // the server emits a naive local ISO timestamp, no offset
    pub timestamp: Option<NaiveDateTime>,
}

// The server returns 503 with a JSON body when unhealthy, so the body is
// parsed regardless of HTTP status. Only `status` drives the display.
#[derive(Debug, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Option<NaiveDateTime>,
    pub uptime_seconds: Option<f64>,
    pub version: Option<String>,
    pub environment: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub error: Option<String>,
}
