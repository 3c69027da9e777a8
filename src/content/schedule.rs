//! Event timing labels.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+):(\d+)").expect("duration pattern is valid"));

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Where an event sits relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Starts later on the current day
    Today,
    /// Starts within the next day
    Tomorrow,
    /// Starts within a week
    InDays(i64),
    /// Starts more than a week from now
    Upcoming,
    /// Between start and end, inclusive
    Ongoing,
    Past,
}

impl EventStatus {
    /// Classifies an event window against `now`.
    ///
    /// Days until start are rounded up, so an event 25 hours away is two
    /// days out.
    pub fn at(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < start {
            if start.date_naive() == now.date_naive() {
                return Self::Today;
            }

            let seconds = (start - now).num_seconds();
            let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
            match days {
                ..=1 => Self::Tomorrow,
                2..=7 => Self::InDays(days),
                _ => Self::Upcoming,
            }
        } else if now <= end {
            Self::Ongoing
        } else {
            Self::Past
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Today => "Today".to_string(),
            Self::Tomorrow => "Tomorrow".to_string(),
            Self::InDays(days) => format!("In {} days", days),
            Self::Upcoming => "Upcoming".to_string(),
            Self::Ongoing => "Happening Now".to_string(),
            Self::Past => "Past Event".to_string(),
        }
    }

    /// CSS modifier for the status badge.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Today => "status-today",
            Self::Tomorrow => "status-tomorrow",
            Self::InDays(_) | Self::Upcoming => "status-upcoming",
            Self::Ongoing => "status-ongoing",
            Self::Past => "status-past",
        }
    }

    pub fn is_upcoming(&self) -> bool {
        !matches!(self, Self::Ongoing | Self::Past)
    }
}

fn parse_duration(duration: &str) -> Option<(u64, u64)> {
    let caps = DURATION.captures(duration)?;
    let hours = caps[1].parse().ok()?;
    let minutes = caps[2].parse().ok()?;
    Some((hours, minutes))
}

fn plural_hours(hours: u64) -> String {
    format!("{} hour{}", hours, if hours > 1 { "s" } else { "" })
}

/// Compact listing form of an `H:MM:SS` interval, e.g. `1h 30m`.
///
/// Unparsable input is returned unchanged.
pub fn format_duration(duration: &str) -> String {
    match parse_duration(duration) {
        None => duration.to_string(),
        Some((hours, minutes)) if hours > 0 && minutes > 0 => format!("{}h {}m", hours, minutes),
        Some((hours, _)) if hours > 0 => plural_hours(hours),
        Some((_, minutes)) => format!("{} minutes", minutes),
    }
}

/// Spelled-out form used on event pages, e.g. `1 hour 30 minutes`.
pub fn format_duration_long(duration: &str) -> String {
    match parse_duration(duration) {
        None => duration.to_string(),
        Some((hours, minutes)) if hours > 0 && minutes > 0 => {
            format!("{} {} minutes", plural_hours(hours), minutes)
        }
        Some((hours, _)) if hours > 0 => plural_hours(hours),
        Some((_, minutes)) => format!("{} minutes", minutes),
    }
}
