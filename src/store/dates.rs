//! Date/time parsing, rendering, and calendar arithmetic
//!
//! Raw date strings from CSV rows are parsed against a prioritized list of
//! chrono format patterns. The list ships with three built-ins and is
//! extensible at the end by the caller; the first pattern that parses wins.
//! When no pattern matches, the row's timestamp resolves to the epoch
//! sentinel rather than being rejected; callers can detect this through the
//! ingestion statistics.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Chronological key of the store
pub type Timestamp = NaiveDateTime;

/// Format patterns every store starts with, tried in this order
pub const BUILTIN_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

/// The epoch timestamp that unparseable date strings collapse onto.
///
/// A row genuinely dated 1970-01-01T00:00:00 is indistinguishable from an
/// unparseable one; this aliasing is a documented property of the fallback.
pub fn sentinel() -> Timestamp {
    NaiveDateTime::UNIX_EPOCH
}

/// Prioritized list of date-parse patterns
///
/// Patterns are tried in registration order; built-ins first, caller
/// additions appended after. Registering a pattern affects only ingestion
/// calls made afterward.
#[derive(Debug, Clone)]
pub struct DateFormatList {
    patterns: Vec<String>,
}

impl Default for DateFormatList {
    fn default() -> Self {
        Self {
            patterns: BUILTIN_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl DateFormatList {
    /// Create a list holding only the built-in patterns
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pattern to the end of the priority list
    pub fn push(&mut self, pattern: impl Into<String>) {
        self.patterns.push(pattern.into());
    }

    /// Append several patterns, preserving their order
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            self.push(pattern);
        }
    }

    /// Registered patterns in priority order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Parse `raw` against each pattern in order, returning the first success
    pub fn try_parse(&self, raw: &str) -> Option<Timestamp> {
        let raw = raw.trim();
        self.patterns
            .iter()
            .find_map(|pattern| parse_with_pattern(raw, pattern))
    }

    /// Like [`DateFormatList::try_parse`], collapsing failure onto the sentinel
    pub fn parse(&self, raw: &str) -> Timestamp {
        self.try_parse(raw).unwrap_or_else(sentinel)
    }
}

/// Parse with a single chrono pattern, accepting date-only patterns too.
///
/// `NaiveDateTime` parsing rejects patterns without time tokens, so a failed
/// datetime parse falls back to a date parse at midnight.
fn parse_with_pattern(raw: &str, pattern: &str) -> Option<Timestamp> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, pattern)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Canonical ISO-8601-extended rendering, e.g. `2020-03-14T08:30:00`
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Day of the week for the given timestamp: 0 = Sunday through 6 = Saturday.
///
/// Sakamoto's closed-form congruence over the proleptic Gregorian calendar;
/// pure function of the date part, no state.
pub fn day_of_week(timestamp: Timestamp) -> u32 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let date = timestamp.date();
    let mut year = date.year();
    let month = date.month() as usize;
    let day = date.day() as i32;

    if month < 3 {
        year -= 1;
    }
    (year + year / 4 - year / 100 + year / 400 + OFFSETS[month - 1] + day).rem_euclid(7) as u32
}
