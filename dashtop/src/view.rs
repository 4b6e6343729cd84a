//! View abstraction: the projection logic writes through this trait so it can
//! be exercised against a recording fake as well as the real TUI state.

use crate::format::format_uptime;
use crate::types::{HealthStatus, StatsSnapshot};

/// Slots the page exposes. A view may carry any subset; projections silently
/// skip roles the view does not have, gauges included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Uptime,
    Requests,
    Version,
    Environment,
    Health,
    Gauge(Metric),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Memory, Metric::Disk];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Memory => "Memory",
            Metric::Disk => "Disk",
        }
    }
}

/// Gauge severity by fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    // danger iff p > 80, warning iff 60 < p <= 80, success otherwise
    pub fn for_percent(p: f64) -> Self {
        if p > 80.0 {
            Severity::Danger
        } else if p > 60.0 {
            Severity::Warning
        } else {
            Severity::Success
        }
    }
}

/// Tint of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Danger,
}

/// The four fixed health presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthView {
    Healthy,
    Warning,
    Unhealthy,
    Unknown,
}

impl HealthView {
    pub fn from_status(status: &str) -> Self {
        match status {
            "healthy" => HealthView::Healthy,
            "warning" => HealthView::Warning,
            "unhealthy" => HealthView::Unhealthy,
            _ => HealthView::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthView::Healthy => "Healthy",
            HealthView::Warning => "Warning",
            HealthView::Unhealthy => "Unhealthy",
            HealthView::Unknown => "Unknown",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            HealthView::Healthy => "✔",
            HealthView::Warning => "▲",
            HealthView::Unhealthy => "✖",
            HealthView::Unknown => "?",
        }
    }
}

pub trait View {
    fn has_role(&self, role: Role) -> bool;
    fn set_text(&mut self, role: Role, text: &str);
    fn set_gauge(&mut self, metric: Metric, percent: f64, severity: Severity);
    fn set_health(&mut self, health: HealthView);
    fn notify(&mut self, message: &str, kind: NoticeKind);
}

/// Project a stats snapshot onto the view. Missing roles and missing data
/// fields are skipped without error.
pub fn apply_stats<V: View + ?Sized>(view: &mut V, snap: &StatsSnapshot) {
    if let Some(app) = &snap.application {
        if view.has_role(Role::Uptime) {
            if let Some(secs) = app.uptime_seconds {
                // negative uptime clamps to zero
                view.set_text(Role::Uptime, &format_uptime(secs.max(0.0) as u64));
            }
        }
        if view.has_role(Role::Requests) {
            if let Some(n) = app.request_count {
                view.set_text(Role::Requests, &n.to_string());
            }
        }
        if view.has_role(Role::Version) {
            if let Some(v) = &app.version {
                view.set_text(Role::Version, v);
            }
        }
        if view.has_role(Role::Environment) {
            if let Some(env) = &app.environment {
                view.set_text(Role::Environment, env);
            }
        }
    }

    if let Some(sys) = &snap.system {
        let fields = [
            (Metric::Cpu, sys.cpu_percent),
            (Metric::Memory, sys.memory_percent),
            (Metric::Disk, sys.disk_percent),
        ];
        for (metric, pct) in fields {
            if view.has_role(Role::Gauge(metric)) {
                if let Some(p) = pct {
                    // out-of-range values pass through; the widget clamps at draw
                    view.set_gauge(metric, p, Severity::for_percent(p));
                }
            }
        }
    }
}

/// Map a health document onto the view, replacing any prior presentation.
pub fn apply_health<V: View + ?Sized>(view: &mut V, health: &HealthStatus) {
    if view.has_role(Role::Health) {
        view.set_health(HealthView::from_status(&health.status));
    }
}
