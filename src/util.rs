//! Date formatting and file naming helpers shared by page generators

use chrono::{DateTime, Utc};

/// Formats a timestamp as a long date, e.g. "March 5, 2024".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats the time of day on a 12 hour clock, e.g. "6:30 PM".
pub fn format_time(date: &DateTime<Utc>) -> String {
    date.format("%-I:%M %p").to_string()
}

/// Formats date and time together, e.g. "March 5, 2024 at 6:30 PM".
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    format!("{} at {}", format_date(date), format_time(date))
}

/// Formats the gap between `then` and `now` as relative time
///
/// Produces strings like "5 min ago" or "2 weeks ago". Timestamps after
/// `now` read as "just now".
pub fn format_relative(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *then).num_seconds().max(0);
    let minutes = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86400;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// File name for a record page.
///
/// Identifiers are used as file names, so anything outside
/// `[A-Za-z0-9_-]` becomes `-`. When that changes the id, or the id is
/// `index` (the listing page), a hash of the original id is appended so
/// distinct ids never share a file.
pub fn page_file_name(id: &str) -> String {
    let slug: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if slug != id || slug.is_empty() || slug == "index" {
        format!("{}-{:08x}.html", slug, id_hash(id))
    } else {
        format!("{}.html", slug)
    }
}

/// 32 bit FNV-1a hash of a record id.
fn id_hash(id: &str) -> u32 {
    const OFFSET: u32 = 0x811c9dc5;
    const PRIME: u32 = 0x01000193;
    id.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(PRIME))
}
