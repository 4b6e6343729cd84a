//! Application panel: uptime and request count.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::Dashboard;

pub fn draw_app_stats(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let uptime = dash.uptime.as_deref().unwrap_or("—");
    let requests = dash.requests.as_deref().unwrap_or("—");

    f.render_widget(
        Paragraph::new(uptime).block(Block::default().borders(Borders::ALL).title("Uptime")),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(requests).block(Block::default().borders(Borders::ALL).title("Requests")),
        cols[1],
    );
}
