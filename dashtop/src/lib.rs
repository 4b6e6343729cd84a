//! dashtop: terminal dashboard client for the demo app stats API.
//!
//! Polls `GET /api/stats` on a fixed interval and projects the snapshot onto
//! a ratatui view; health checks, clipboard copy and transient notifications
//! are triggered on demand.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod dashboard;
pub mod format;
pub mod poller;
pub mod profiles;
pub mod types;
pub mod ui;
pub mod view;
