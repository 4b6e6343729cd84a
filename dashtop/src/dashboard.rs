//! Dashboard state: the TUI-side implementation of the View trait, plus the
//! transient notification queue.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::view::{HealthView, Metric, NoticeKind, Role, Severity, View};

/// How long a notification stays on screen unless dismissed earlier.
pub const TOAST_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone)]
pub struct GaugeState {
    pub percent: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

pub struct Dashboard {
    /// Host label shown in the header.
    pub endpoint: String,
    pub uptime: Option<String>,
    pub requests: Option<String>,
    pub version: Option<String>,
    pub environment: Option<String>,
    /// Raw body of the most recent snapshot, handed out by clipboard copy.
    pub last_raw: Option<String>,
    pub cpu: Option<GaugeState>,
    pub memory: Option<GaugeState>,
    pub disk: Option<GaugeState>,
    /// None until the first successful health check.
    pub health: Option<HealthView>,
    pub toasts: VecDeque<Toast>,
    auto_refresh: bool,
}

impl Dashboard {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            uptime: None,
            requests: None,
            version: None,
            environment: None,
            last_raw: None,
            cpu: None,
            memory: None,
            disk: None,
            health: None,
            toasts: VecDeque::new(),
            auto_refresh: true,
        }
    }

    /// The auto-refresh marker: polling starts only while this is set.
    pub fn wants_auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn set_auto_refresh(&mut self, on: bool) {
        self.auto_refresh = on;
    }

    pub fn remember_raw(&mut self, raw: String) {
        self.last_raw = Some(raw);
    }

    pub fn gauge(&self, metric: Metric) -> Option<&GaugeState> {
        match metric {
            Metric::Cpu => self.cpu.as_ref(),
            Metric::Memory => self.memory.as_ref(),
            Metric::Disk => self.disk.as_ref(),
        }
    }

    /// Push a toast with an explicit creation time so expiry is testable.
    pub fn notify_at(&mut self, message: &str, kind: NoticeKind, now: Instant) {
        self.toasts.push_back(Toast {
            message: message.to_string(),
            kind,
            expires_at: now + TOAST_TTL,
        });
    }

    /// Drop toasts whose lifetime has elapsed.
    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Manual dismissal removes the oldest toast first.
    pub fn dismiss_toast(&mut self) {
        self.toasts.pop_front();
    }
}

impl View for Dashboard {
    fn has_role(&self, _role: Role) -> bool {
        // the built-in layout carries every slot
        true
    }

    fn set_text(&mut self, role: Role, text: &str) {
        match role {
            Role::Uptime => self.uptime = Some(text.to_string()),
            Role::Requests => self.requests = Some(text.to_string()),
            Role::Version => self.version = Some(text.to_string()),
            Role::Environment => self.environment = Some(text.to_string()),
            Role::Health | Role::Gauge(_) => {}
        }
    }

    fn set_gauge(&mut self, metric: Metric, percent: f64, severity: Severity) {
        let state = Some(GaugeState { percent, severity });
        match metric {
            Metric::Cpu => self.cpu = state,
            Metric::Memory => self.memory = state,
            Metric::Disk => self.disk = state,
        }
    }

    fn set_health(&mut self, health: HealthView) {
        self.health = Some(health);
    }

    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.notify_at(message, kind, Instant::now());
    }
}
