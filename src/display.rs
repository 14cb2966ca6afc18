use chrono::NaiveDate;

/// Per-task duration: hours are dropped entirely when zero.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

/// Plan total: both components always shown, even "0h 0m".
pub fn format_total(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Abbreviated deadline, e.g. "Jun 10".
pub fn format_deadline(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Header date, e.g. "Monday, June 10, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
