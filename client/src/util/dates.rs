//! Date parsing, day-boundary normalization, and Spanish display formats.
//!
//! All comparisons happen on local wall-clock `NaiveDateTime`s. Backend
//! timestamps are converted to local time once, at load, so later filtering
//! never has to think about offsets.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

/// Parse a backend timestamp into local wall-clock time.
///
/// Accepts RFC 3339 with an offset (converted to local), an offset-less
/// date-time (taken as local), or a bare date (UTC midnight, converted to
/// local like any other instant).
pub fn parse_timestamp_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&start_of_day(date)).with_timezone(&Local).naive_local())
}

/// 00:00:00.000 of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + TimeDelta::days(1) - TimeDelta::milliseconds(1)
}

/// 12:00:00.000 on the day of `moment`.
pub fn midday(moment: NaiveDateTime) -> NaiveDateTime {
    start_of_day(moment.date()) + TimeDelta::hours(12)
}

/// Long card date, e.g. `5 marzo 2024`.
pub fn format_long_es(moment: NaiveDateTime) -> String {
    moment.date().format_localized("%-d %B %Y", Locale::es_ES).to_string()
}

/// Short picker date, e.g. `05/03/2024`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse the `YYYY-MM-DD` value of an `<input type="date">`; empty is `None`.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Inverse of [`parse_input_date`] for binding the input's value.
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
