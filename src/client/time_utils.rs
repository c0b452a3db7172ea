//! Time Formatting and Version Grouping
//!
//! Display helpers for the history panel: relative/absolute timestamps and
//! calendar-day bucketing of version lists. All functions are total:
//! unparseable timestamps degrade to the raw input string.

use crate::shared::version::DocumentVersion;
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc};

fn parse(date: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date).ok()
}

/// Format a timestamp as relative time (e.g. "2 hours ago")
pub fn format_relative_time(date: &str) -> String {
    format_relative_time_at(date, Utc::now())
}

/// Relative time against an explicit reference instant
pub fn format_relative_time_at(date: &str, now: DateTime<Utc>) -> String {
    let Some(target) = parse(date) else {
        return date.to_string();
    };

    let diff = now.signed_duration_since(target.with_timezone(&Utc));
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        format_absolute_time(date)
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Format a timestamp as absolute time (e.g. "Jan 15, 2024 3:45 PM")
pub fn format_absolute_time(date: &str) -> String {
    match parse(date) {
        Some(target) => target.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => date.to_string(),
    }
}

/// Check if a timestamp falls on today's date
pub fn is_today(date: &str) -> bool {
    parse(date).is_some_and(|target| target.date_naive() == Utc::now().date_naive())
}

/// Check if a timestamp falls on yesterday's date
pub fn is_yesterday(date: &str) -> bool {
    let yesterday = Utc::now().date_naive().checked_sub_days(Days::new(1));
    parse(date).is_some_and(|target| Some(target.date_naive()) == yesterday)
}

/// Group versions by calendar day with descriptive headers
///
/// Buckets are labeled "Today", "Yesterday", or "January 15, 2024", and
/// both the buckets and the versions inside them keep their input order
/// (the caller passes lists newest-first).
pub fn group_versions_by_day(
    versions: &[DocumentVersion],
) -> Vec<(String, Vec<DocumentVersion>)> {
    group_versions_by_day_at(versions, Utc::now().date_naive())
}

/// Day grouping against an explicit "today"
pub fn group_versions_by_day_at(
    versions: &[DocumentVersion],
    today: NaiveDate,
) -> Vec<(String, Vec<DocumentVersion>)> {
    let mut groups: Vec<(String, Vec<DocumentVersion>)> = Vec::new();

    for version in versions {
        let label = day_label(&version.created_at, today);
        match groups.iter_mut().find(|(key, _)| *key == label) {
            Some((_, bucket)) => bucket.push(version.clone()),
            None => groups.push((label, vec![version.clone()])),
        }
    }
    groups
}

fn day_label(date: &str, today: NaiveDate) -> String {
    let Some(target) = parse(date) else {
        return date.to_string();
    };
    let day = target.date_naive();

    if day == today {
        "Today".to_string()
    } else if Some(day) == today.checked_sub_days(Days::new(1)) {
        "Yesterday".to_string()
    } else {
        format!("{} {}, {}", month_name(day.month()), day.day(), day.year())
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
