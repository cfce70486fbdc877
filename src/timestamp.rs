//! Timestamp resolution for heterogeneous wire formats

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::types::TimestampValue;

/// Resolves wire timestamps to concrete UTC instants.
///
/// Ledger payloads carry timestamps in whatever shape the producing system
/// favored: epoch milliseconds, RFC 3339 date-times, zone-less date-times,
/// or bare calendar dates. The resolver maps all of them onto one timeline
/// and degrades anything else to `None` rather than guessing.
///
/// Zone-less values are pinned to UTC so the outcome never depends on the
/// host's local timezone.
pub struct TimestampResolver;

impl TimestampResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a raw timestamp to epoch milliseconds.
    ///
    /// Returns `None` for absent values, empty or unparsable strings, and
    /// numeric values too far from the epoch to represent as an instant.
    pub fn resolve(&self, value: Option<&TimestampValue>) -> Option<i64> {
        self.resolve_datetime(value).map(|instant| instant.timestamp_millis())
    }

    /// Resolve a raw timestamp to a UTC instant.
    pub fn resolve_datetime(&self, value: Option<&TimestampValue>) -> Option<DateTime<Utc>> {
        match value? {
            TimestampValue::Millis(millis) => DateTime::from_timestamp_millis(*millis),
            TimestampValue::Text(text) => self.parse_text(text),
        }
    }

    /// Try the accepted textual formats from most to least specific.
    fn parse_text(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(day.and_time(NaiveTime::MIN).and_utc());
        }
        None
    }
}

impl Default for TimestampResolver {
    fn default() -> Self {
        Self::new()
    }
}
