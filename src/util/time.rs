use chrono::{DateTime, Utc};

/// Seconds or minutes spent waiting, e.g. `7s` or `2m 05s`.
pub fn elapsed_label(since: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(since).num_seconds().max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Coarse age of a past event, e.g. `just now`, `4m ago`, `2h ago`.
pub fn age_label(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(at).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    format!("{}d ago", hours / 24)
}
