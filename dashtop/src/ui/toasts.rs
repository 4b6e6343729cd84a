//! Notification overlay, stacked in the top-right corner.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::dashboard::Dashboard;
use crate::ui::theme::notice_color;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

pub fn draw_toasts(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);
    let mut y = area.y + 1;

    for toast in &dash.toasts {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let style = Style::default().fg(notice_color(toast.kind));
        let p = Paragraph::new(toast.message.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
        y += TOAST_HEIGHT;
    }
}
