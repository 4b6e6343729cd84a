//! Auto-refresh polling: a repeating timer task that fires independent fetches
//! and delivers results to the render loop over a channel.

use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use url::Url;

use crate::api::{self, FetchError};
use crate::types::{HealthStatus, StatsSnapshot};
use crate::view::{self, NoticeKind, View};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug)]
pub enum PollEvent {
    Stats {
        snapshot: StatsSnapshot,
        /// Raw body as served, kept around for clipboard copy.
        raw: String,
    },
    StatsError(FetchError),
    Health(HealthStatus),
    HealthError(FetchError),
}

/// Start the repeating stats poller. Each tick spawns its own fetch, so a slow
/// response never delays or cancels the next cycle. The task exits once the
/// receiving side is gone.
pub fn spawn_auto_refresh(
    client: Client,
    base: Url,
    interval: Duration,
    tx: UnboundedSender<PollEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }
            let client = client.clone();
            let base = base.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let ev = match api::fetch_stats(&client, &base).await {
                    Ok((snapshot, raw)) => PollEvent::Stats { snapshot, raw },
                    Err(e) => PollEvent::StatsError(e),
                };
                let _ = tx.send(ev);
            });
        }
    })
}

/// One-shot health check, delivered on the same channel as the poller.
pub fn spawn_health_check(client: Client, base: Url, tx: UnboundedSender<PollEvent>) {
    tokio::spawn(async move {
        let ev = match api::fetch_health(&client, &base).await {
            Ok(health) => PollEvent::Health(health),
            Err(e) => PollEvent::HealthError(e),
        };
        let _ = tx.send(ev);
    });
}

/// Apply one poll result to the view. A failed stats fetch surfaces as a
/// single warning notification; a failed health check is only logged and the
/// prior presentation stays.
pub fn apply_event<V: View + ?Sized>(view: &mut V, ev: PollEvent) {
    match ev {
        PollEvent::Stats { snapshot, .. } => view::apply_stats(view, &snapshot),
        PollEvent::StatsError(e) => {
            tracing::warn!(error = %e, "stats fetch failed");
            view.notify("Failed to fetch updated stats", NoticeKind::Warning);
        }
        PollEvent::Health(health) => view::apply_health(view, &health),
        PollEvent::HealthError(e) => {
            tracing::warn!(error = %e, "health check failed");
        }
    }
}
