//! Display formatting for costs, sizes, timestamps, and snippets.
//!
//! Timestamps are ISO-8601 strings straight from the backend. The fields are
//! sliced out directly instead of pulling in a date library; the client only
//! relabels them for tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Render a decimal cost string as `$0.000412`. Unparseable input renders
/// as a dash rather than propagating an error into a table cell.
pub fn format_cost(cost_usd: &str) -> String {
    cost_usd
        .parse::<f64>()
        .map_or_else(|_| "—".to_owned(), format_cost_value)
}

/// Render an already-numeric cost, used by the metrics aggregates.
pub fn format_cost_value(cost_usd: f64) -> String {
    format!("${cost_usd:.6}")
}

/// Human-readable byte count: `0 B`, `1.5 KB`, `2 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_owned();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{text} {}", UNITS[unit])
}

/// `2026-08-01T10:05:00Z` → `Aug 01, 2026 10:05`. Anything that does not
/// slice as an ISO timestamp renders as `Invalid date`.
pub fn format_timestamp(iso: &str) -> String {
    match split_iso(iso) {
        Some((year, month, day, hour, minute)) => {
            format!("{} {day:02}, {year} {hour:02}:{minute:02}", MONTHS[month as usize - 1])
        }
        None => "Invalid date".to_owned(),
    }
}

/// Hour-of-day label for the last-24h buckets: `10:00`.
pub fn format_hour(iso: &str) -> String {
    match split_iso(iso) {
        Some((_, _, _, hour, minute)) => format!("{hour:02}:{minute:02}"),
        None => "—".to_owned(),
    }
}

fn split_iso(iso: &str) -> Option<(u32, u32, u32, u32, u32)> {
    let (date, time) = iso.split_once('T')?;

    let mut date_parts = date.splitn(3, '-');
    let year: u32 = date_parts.next()?.parse().ok()?;
    let month: u32 = date_parts.next()?.parse().ok()?;
    let day: u32 = date_parts.next()?.parse().ok()?;

    let mut time_parts = time.splitn(3, ':');
    let hour: u32 = time_parts.next()?.parse().ok()?;
    let minute: u32 = time_parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || minute > 59 {
        return None;
    }
    Some((year, month, day, hour, minute))
}

/// First `max_chars` characters of a snippet with a trailing ellipsis.
/// Cuts on character boundaries, so multi-byte text stays intact.
pub fn snippet_preview(snippet: &str, max_chars: usize) -> String {
    if snippet.chars().count() <= max_chars {
        return snippet.to_owned();
    }
    let truncated: String = snippet.chars().take(max_chars).collect();
    format!("{truncated}...")
}
