// src/utils/time_format.rs
use chrono::{DateTime, Utc};

/// Format a timestamp relative to `now` the way the feed displays it.
///
/// Buckets, lower bound inclusive: under a minute "Just now", under an hour
/// "{n}m ago", under a day "{n}h ago", under a week "{n}d ago", anything
/// older a plain date. Exactly 60 minutes is "1h ago", not "60m ago".
/// Timestamps in the future clamp to "Just now".
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }

    at.format("%-m/%-d/%Y").to_string()
}
