//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use uuid::Uuid;

use exertrack_core::tracker::{Exercise, User};

/// Convert a SQLite row to a User.
///
/// Expected columns: id, username
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let id: String = row.get(0)?;
    let username: String = row.get(1)?;

    Ok(User {
        id: parse_uuid(&id)?,
        username,
    })
}

/// Convert a SQLite row to an Exercise.
///
/// Expected columns: id, description, duration, date
pub fn row_to_exercise(row: &Row) -> rusqlite::Result<Exercise> {
    let description: String = row.get(1)?;
    let duration: u32 = row.get(2)?;
    let date: String = row.get(3)?;

    Ok(Exercise {
        description,
        duration,
        date: parse_date(&date)?,
    })
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
