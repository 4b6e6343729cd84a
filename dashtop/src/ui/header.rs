//! Top header with endpoint host, health indicator and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::dashboard::Dashboard;
use crate::ui::theme::{health_color, HEADER_FG};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard) {
    let health = match dash.health {
        Some(h) => Span::styled(
            format!("{} {}", h.glyph(), h.label()),
            Style::default().fg(health_color(h)),
        ),
        None => Span::styled("not checked", Style::default().fg(HEADER_FG)),
    };

    // build info appears once the snapshot carries it
    let build = match (dash.version.as_deref(), dash.environment.as_deref()) {
        (Some(v), Some(e)) => format!(" [{v} @ {e}]"),
        (Some(v), None) => format!(" [{v}]"),
        (None, Some(e)) => format!(" [{e}]"),
        (None, None) => String::new(),
    };

    let title = Line::from(vec![
        Span::raw(format!("dashtop — {}{build} | health: ", dash.endpoint)),
        health,
        Span::raw("  ('q' quit, 'h' health, 'c' copy, 'x' dismiss)"),
    ]);
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
