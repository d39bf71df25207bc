pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

pub fn format_relative_time(unix_ts: i64) -> String {
    if unix_ts <= 0 {
        return String::new();
    }
    let elapsed_secs = chrono::Utc::now().timestamp() - unix_ts;
    if elapsed_secs < 0 {
        return "just now".to_string();
    }
    let mins = elapsed_secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    match () {
        _ if days > 0 => format!("{}d ago", days),
        _ if hours > 0 => format!("{}h ago", hours),
        _ if mins > 0 => format!("{}m ago", mins),
        _ => "just now".to_string(),
    }
}

/// Absolute date for the detail view, e.g. "09 Jan 2025".
pub fn format_date(unix_ts: i64) -> String {
    if unix_ts <= 0 {
        return String::new();
    }
    chrono::DateTime::from_timestamp(unix_ts, 0)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_default()
}
