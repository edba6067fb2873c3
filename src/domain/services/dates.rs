//! Calendar arithmetic over ISO date strings
//!
//! Dates in the snapshot are plain `YYYY-MM-DD` strings typed by the
//! user, so both functions absorb garbage instead of failing:
//! `months_between` clamps to its floor of 1, `days_until` yields 0.

use chrono::{Datelike, NaiveDate};

fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whole months spanned by two dates, by calendar component only
///
/// `(end_year - start_year) * 12 + (end_month - start_month)`, floored
/// at 1 so it is always a safe averaging divisor. Days are ignored:
/// Jan 15 to Jan 20 is 1 month, Dec 1 to Jan 1 is 1 month.
pub fn months_between(start_iso: &str, end_iso: &str) -> u32 {
    let (start, end) = match (parse_iso(start_iso), parse_iso(end_iso)) {
        (Some(start), Some(end)) => (start, end),
        _ => return 1,
    };
    let months = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);
    months.max(1) as u32
}

/// Calendar days from `today` to `date_iso`, negative for past dates
pub fn days_until(date_iso: &str, today: NaiveDate) -> i64 {
    match parse_iso(date_iso) {
        Some(date) => (date - today).num_days(),
        None => 0,
    }
}
