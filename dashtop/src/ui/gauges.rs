//! System gauges: cpu / memory / disk with severity coloring.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::dashboard::Dashboard;
use crate::format::format_percent;
use crate::ui::theme::severity_color;
use crate::view::Metric;

pub fn draw_gauges(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (metric, col) in Metric::ALL.into_iter().zip(cols.iter()) {
        draw_gauge(f, *col, dash, metric);
    }
}

fn draw_gauge(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard, metric: Metric) {
    let block = Block::default().borders(Borders::ALL).title(metric.label());
    match dash.gauge(metric) {
        Some(g) => {
            // the label shows the raw value; only the fill ratio is clamped
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(severity_color(g.severity)))
                .ratio((g.percent / 100.0).clamp(0.0, 1.0))
                .label(format_percent(g.percent));
            f.render_widget(gauge, area);
        }
        None => {
            let gauge = Gauge::default().block(block).ratio(0.0).label("—");
            f.render_widget(gauge, area);
        }
    }
}
