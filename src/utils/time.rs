//! Time utilities: parsing and formatting of movement timestamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serializer;

/// Text format of every timestamp read from or written to a movement CSV.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `YYYY-MM-DD HH:MM:SS`. Date and time must be separated by whitespace
/// and leap seconds are rejected.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let (date, time) = s.trim().split_once(char::is_whitespace)?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time.trim_start(), "%H:%M:%S").ok()?;

    // chrono stores :60 as nanosecond >= 1_000_000_000
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(date.and_time(time))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// serde helper: write timestamps in the CSV format instead of ISO 8601.
pub fn serialize_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
