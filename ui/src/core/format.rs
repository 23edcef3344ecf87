//! Formatting helpers for presenting statistics.

use time::{macros::format_description, OffsetDateTime};

/// Compact connection duration: `3725` -> `"1h2m5s"`, `125` -> `"2m5s"`, `45` -> `"45s"`.
///
/// Fractional seconds are truncated; negative or non-finite input renders as `"0s"`.
pub fn format_duration_secs(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{secs}s")
    } else if minutes > 0 {
        format!("{minutes}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

pub fn format_hours(value: f64) -> String {
    format!("{value:.1} h")
}

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.2}%")
}

/// `HH:MM` (UTC) label for the last successful refresh.
pub fn format_updated_at(ts: OffsetDateTime) -> String {
    ts.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}
