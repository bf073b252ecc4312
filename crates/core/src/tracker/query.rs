//! Log query: date-bounded, count-limited selection over a user's log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::Exercise;
use crate::serde::{deserialize_lenient_date, deserialize_lenient_i64};

/// Optional filters for `GET /api/users/{_id}/logs`.
///
/// Unparseable values are dropped during deserialization, so a request with
/// `?from=garbage` behaves exactly like one without `from`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQuery {
    /// Inclusive lower bound on the entry date.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<NaiveDate>,
    /// Positive keeps the first `n` matches, negative keeps the last `|n|`.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,
}

/// Which part of the filtered log survives the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSlice {
    All,
    Empty,
    First(usize),
    Last(usize),
}

impl LogQuery {
    /// Create an empty query (no filters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound.
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Set the inclusive upper bound.
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the limit.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if the date falls within the configured bounds.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Interprets the limit.
    pub fn slice(&self) -> LogSlice {
        match self.limit {
            None => LogSlice::All,
            Some(0) => LogSlice::Empty,
            Some(n) if n > 0 => LogSlice::First(usize::try_from(n).unwrap_or(usize::MAX)),
            Some(n) => LogSlice::Last(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX)),
        }
    }

    /// Filters by date, then slices by limit. Insertion order is preserved.
    pub fn apply(&self, entries: &[Exercise]) -> Vec<Exercise> {
        let filtered = entries.iter().filter(|e| self.matches(e.date));

        match self.slice() {
            LogSlice::All => filtered.cloned().collect(),
            LogSlice::Empty => Vec::new(),
            LogSlice::First(n) => filtered.take(n).cloned().collect(),
            LogSlice::Last(n) => {
                let matched: Vec<&Exercise> = filtered.collect();
                let skip = matched.len().saturating_sub(n);
                matched.into_iter().skip(skip).cloned().collect()
            }
        }
    }
}
