//! Translates a [`LogQuery`] into a parameterised SQL statement.
//!
//! Date bounds become optional `WHERE` clauses. A positive limit is a plain
//! `LIMIT`; a negative one takes the newest rows in a descending subquery and
//! re-orders them so callers always see insertion order.

use rusqlite::types::Value;
use uuid::Uuid;

use exertrack_core::tracker::{LogQuery, LogSlice};

use super::conversions::format_date;
use super::schema::SELECT_LOG_BASE;

/// A ready-to-run log selection.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSql {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Builds the SQL for a user's log.
///
/// Returns `None` when the query can only produce an empty log (`limit=0`),
/// so the caller can skip the round trip.
pub fn build_log_query(user_id: Uuid, query: &LogQuery) -> Option<LogSql> {
    let mut sql = String::from(SELECT_LOG_BASE);
    let mut params = vec![Value::Text(user_id.to_string())];

    if let Some(from) = query.from {
        sql.push_str(" AND date >= ?");
        params.push(Value::Text(format_date(&from)));
    }
    if let Some(to) = query.to {
        sql.push_str(" AND date <= ?");
        params.push(Value::Text(format_date(&to)));
    }

    match query.slice() {
        LogSlice::Empty => return None,
        LogSlice::All => sql.push_str(" ORDER BY id ASC"),
        LogSlice::First(n) => {
            sql.push_str(" ORDER BY id ASC LIMIT ?");
            params.push(Value::Integer(to_sql_limit(n)));
        }
        LogSlice::Last(n) => {
            sql = format!(
                "SELECT id, description, duration, date FROM ({sql} ORDER BY id DESC LIMIT ?) ORDER BY id ASC"
            );
            params.push(Value::Integer(to_sql_limit(n)));
        }
    }

    Some(LogSql { sql, params })
}

fn to_sql_limit(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
