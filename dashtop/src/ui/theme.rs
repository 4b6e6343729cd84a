//! Shared UI theme constants.

use ratatui::style::Color;

use crate::view::{HealthView, NoticeKind, Severity};

pub const HEADER_FG: Color = Color::Rgb(170, 170, 180);

pub fn severity_color(s: Severity) -> Color {
    match s {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

pub fn notice_color(k: NoticeKind) -> Color {
    match k {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Danger => Color::Red,
    }
}

pub fn health_color(h: HealthView) -> Color {
    match h {
        HealthView::Healthy => Color::Green,
        HealthView::Warning => Color::Yellow,
        HealthView::Unhealthy => Color::Red,
        HealthView::Unknown => Color::DarkGray,
    }
}
