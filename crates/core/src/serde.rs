//! Serde helper functions for form and query-string deserialization.
//!
//! Browsers submit every form field as a string, and empty inputs arrive as
//! empty strings. These helpers normalise those quirks. The `lenient_*`
//! variants never fail: values that do not parse are treated as absent, which
//! is how optional log filters behave.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::tracker::parse_date;

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional date, treating empty or unparseable input as None.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref().and_then(parse_date))
}

/// Deserialize an optional integer, treating empty or unparseable input as None.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse().ok()))
}
