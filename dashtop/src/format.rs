//! Small formatting helpers: uptime tiers and percentage text.

// Tiered like the dashboard shows it: seconds, then "Mm Ss", "Hh Mm", "Dd Hh".
// Each boundary (60, 3600, 86400) belongs to the next-higher tier.
pub fn format_uptime(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

pub fn format_percent(p: f64) -> String {
    format!("{p:.1}%")
}
