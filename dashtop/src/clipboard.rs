//! Clipboard access behind a small trait so the app logic stays testable.
//! The production implementation emits an OSC 52 sequence, which works over
//! ssh where a windowing clipboard is unavailable.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::view::{NoticeKind, View};

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Copy the latest raw snapshot to the clipboard and surface the outcome as a
/// notification. With no snapshot fetched yet there is nothing to copy.
pub fn copy_snapshot<V: View + ?Sized>(
    clipboard: &mut dyn Clipboard,
    view: &mut V,
    raw: Option<&str>,
) {
    let Some(text) = raw else {
        view.notify("No snapshot to copy yet", NoticeKind::Info);
        return;
    };
    match clipboard.copy(text) {
        Ok(()) => view.notify("Copied to clipboard!", NoticeKind::Success),
        Err(e) => {
            tracing::error!(error = %e, "could not copy text");
            view.notify("Failed to copy to clipboard", NoticeKind::Danger);
        }
    }
}

pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        let encoded = STANDARD.encode(text.as_bytes());
        let mut out = io::stdout();
        write!(out, "\x1b]52;c;{encoded}\x07")?;
        out.flush()?;
        Ok(())
    }
}
