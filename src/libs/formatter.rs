//! Formatting helpers for durations and timestamps shown to the user.
//!
//! Durations follow Jira's own short notation (`6h`, `2h 30m`, `45m`) so that
//! locally formatted values read the same as the ones Jira returns.

use chrono::{DateTime, Local};

/// Formats whole seconds as hours and minutes, e.g. `2h 30m`.
///
/// Seconds below a minute are dropped and negative durations read as `0m`.
///
/// ```rust
/// use jlog::libs::formatter::format_seconds;
///
/// assert_eq!(format_seconds(6 * 3600), "6h");
/// assert_eq!(format_seconds(9000), "2h 30m");
/// assert_eq!(format_seconds(45 * 60), "45m");
/// ```
pub fn format_seconds(seconds: i64) -> String {
    let minutes = seconds.max(0) / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    match (hours, minutes) {
        (0, minutes) => format!("{}m", minutes),
        (hours, 0) => format!("{}h", hours),
        (hours, minutes) => format!("{}h {}m", hours, minutes),
    }
}

/// Formats a timestamp the way dates are entered on the command line.
pub fn format_started(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_updated(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
