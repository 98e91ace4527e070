//! Time utilities: UTC day windows, truncated minute arithmetic,
//! RFC3339 parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// The query window for one calendar day: UTC 00:00:00.000 through
/// UTC 23:59:59.999. Callers must use this boundary regardless of the
/// local timezone used for display.
pub fn day_window_utc(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap());
    let end = Utc.from_utc_datetime(&day.and_hms_milli_opt(23, 59, 59, 999).unwrap());
    (start, end)
}

/// Whole minutes between two instants, truncated toward zero.
/// Fractional seconds are discarded, never rounded up.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}

pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    if let Some(s) = input {
        Ok(Some(parse_timestamp(s)?))
    } else {
        Ok(None)
    }
}
