//! App state and main loop: input handling, applying poll results, drawing.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use reqwest::Client;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::sleep;
use url::Url;

use crate::clipboard::{self, Clipboard};
use crate::dashboard::Dashboard;
use crate::poller::{self, PollEvent};
use crate::ui::{
    gauges::draw_gauges, header::draw_header, stats::draw_app_stats, toasts::draw_toasts,
};

pub struct App {
    pub dashboard: Dashboard,
    client: Client,
    base: Url,
    interval: Duration,
    clipboard: Box<dyn Clipboard>,
    should_quit: bool,
}

impl App {
    pub fn new(client: Client, base: Url, interval: Duration, clipboard: Box<dyn Clipboard>) -> Self {
        let host = base.host_str().unwrap_or("?").to_string();
        Self {
            dashboard: Dashboard::new(host),
            client,
            base,
            interval,
            clipboard,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let (tx, mut rx) = unbounded_channel();

        // The repeating timer starts only when the view opts in.
        let poller = self.dashboard.wants_auto_refresh().then(|| {
            poller::spawn_auto_refresh(self.client.clone(), self.base.clone(), self.interval, tx.clone())
        });

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal, &tx, &mut rx).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Some(handle) = poller {
            handle.abort();
        }
        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        tx: &UnboundedSender<PollEvent>,
        rx: &mut UnboundedReceiver<PollEvent>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    match k.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            self.should_quit = true;
                        }
                        KeyCode::Char('h') | KeyCode::Char('H') => {
                            poller::spawn_health_check(
                                self.client.clone(),
                                self.base.clone(),
                                tx.clone(),
                            );
                        }
                        KeyCode::Char('c') | KeyCode::Char('C') => self.copy_snapshot(),
                        KeyCode::Char('x') | KeyCode::Char('X') => {
                            self.dashboard.dismiss_toast();
                        }
                        _ => {}
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Apply any poll results that arrived since the last frame
            while let Ok(ev) = rx.try_recv() {
                if let PollEvent::Stats { raw, .. } = &ev {
                    self.dashboard.remember_raw(raw.clone());
                }
                poller::apply_event(&mut self.dashboard, ev);
            }
            self.dashboard.prune_toasts(Instant::now());

            // Draw
            terminal.draw(|f| draw(f, &self.dashboard))?;

            sleep(Duration::from_millis(100)).await;
        }
        Ok(())
    }

    fn copy_snapshot(&mut self) {
        let raw = self.dashboard.last_raw.clone();
        clipboard::copy_snapshot(&mut *self.clipboard, &mut self.dashboard, raw.as_deref());
    }
}

pub fn draw(f: &mut ratatui::Frame<'_>, dash: &Dashboard) {
    let area = f.area();

    // Root rows: header, application stats, system gauges, filler
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // uptime + requests
            Constraint::Length(3), // cpu / memory / disk
            Constraint::Min(0),
        ])
        .split(area);

    draw_header(f, rows[0], dash);
    draw_app_stats(f, rows[1], dash);
    draw_gauges(f, rows[2], dash);

    // Toasts render last so they sit on top
    draw_toasts(f, area, dash);
}
