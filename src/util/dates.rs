//! Conversions between header dates, unix seconds, and date-input values.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dates live as `DateTime<Utc>` in form state, travel as unix seconds on
//! the wire, and are edited through `<input type="date">` which speaks
//! `YYYY-MM-DD`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Rehydrate unix seconds into a timestamp. Out-of-range values yield `None`.
pub fn from_unix(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// Unix seconds for a timestamp; sub-second precision is dropped.
pub fn to_unix(date: &DateTime<Utc>) -> i64 {
    date.timestamp()
}

/// Value for a date input.
pub fn to_input_value(date: &DateTime<Utc>) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Human-readable day/month/year label.
pub fn to_display(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse a date input value into midnight UTC of that day.
pub fn parse_input_value(raw: &str) -> Option<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(raw.trim(), INPUT_FORMAT).ok()?;
    Some(day.and_hms_opt(0, 0, 0)?.and_utc())
}
