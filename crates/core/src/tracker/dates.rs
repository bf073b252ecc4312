//! Date parsing and display helpers.
//!
//! Exercise dates are plain calendar dates. Input is accepted in a few common
//! shapes; output always uses the short human form, e.g. `Mon Jan 01 1990`.

use chrono::{DateTime, Datelike, NaiveDate};

/// Display format used in every API response.
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parses a date from user input.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and RFC 3339 timestamps (the date part
/// is kept as written, without timezone conversion). Surrounding whitespace is
/// ignored. Years must have four digits (`0001..=9999`) so stored dates keep a
/// fixed width and order the same as text. Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y/%m/%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .filter(|date| (MIN_YEAR..=MAX_YEAR).contains(&date.year()))
}

/// Formats a date as `Www Mmm DD YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
