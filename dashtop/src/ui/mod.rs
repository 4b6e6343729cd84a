//! Drawing helpers, one module per panel.

pub mod gauges;
pub mod header;
pub mod stats;
pub mod theme;
pub mod toasts;
