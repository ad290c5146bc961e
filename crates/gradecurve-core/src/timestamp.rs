//! Submission timestamp parsing.
//!
//! The judge export writes one combined column of the shape
//! `"M/D/YYYY, H:MM:SS AM"`. [`split_stamp`] separates it into its date and
//! time substrings with a single capture; the parse functions turn those
//! substrings into naive timestamps. All timestamps are naive local time —
//! the export carries no zone information.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::GradeError;

/// Date substring format, single-digit tolerant.
pub const DATE_FORMAT: &str = "%m/%d/%Y";
/// Time substring format, 12-hour clock with seconds.
pub const TIME_FORMAT: &str = "%I:%M:%S %p";
/// Due-date format used by the configuration table (no seconds).
pub const DUE_DATE_FORMAT: &str = "%m/%d/%Y %I:%M %p";

fn stamp_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?P<date>\d{1,2}/\d{1,2}/\d{4}),\s+(?P<time>\d{1,2}:\d{2}:\d{2}\s+[AP]M)")
            .expect("hard-coded stamp pattern is valid")
    })
}

/// Split a combined submission stamp into its date and time substrings.
///
/// Returns empty strings when the raw field does not match; downstream
/// parsing then fails the row rather than zero-filling it.
pub fn split_stamp(raw: &str) -> (String, String) {
    match stamp_pattern().captures(raw) {
        Some(caps) => (caps["date"].to_string(), caps["time"].to_string()),
        None => (String::new(), String::new()),
    }
}

/// Parse the date and time substrings of one submission into a timestamp.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, GradeError> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        GradeError::TimestampFormat {
            text: date.to_string(),
        }
    })?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| {
        GradeError::TimestampFormat {
            text: time.to_string(),
        }
    })?;
    Ok(NaiveDateTime::new(date, time))
}

/// Parse a configured due-date string (`M/D/YYYY h:mm AM|PM`).
pub fn parse_due(raw: &str) -> Result<NaiveDateTime, GradeError> {
    NaiveDateTime::parse_from_str(raw.trim(), DUE_DATE_FORMAT).map_err(|_| {
        GradeError::TimestampFormat {
            text: raw.to_string(),
        }
    })
}
