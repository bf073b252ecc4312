//! API response shapes.
//!
//! Identifiers are exposed as `_id` and dates as display strings
//! (`Mon Jan 01 1990`). The client deserializes the same types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::format_display_date;
use super::query::LogQuery;
use super::types::{Exercise, ExerciseLog, User};

/// A user as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Response to adding an exercise: the user plus the stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub description: String,
    pub duration: u32,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            date: format_display_date(exercise.date),
            description: exercise.description.clone(),
            duration: exercise.duration,
        }
    }
}

/// One entry in a log response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<&Exercise> for LogEntryResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_display_date(exercise.date),
        }
    }
}

/// A user's log after filtering.
///
/// `from` and `to` are only present when the corresponding filter was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub log: Vec<LogEntryResponse>,
}

impl LogResponse {
    pub fn new(log: &ExerciseLog, query: &LogQuery) -> Self {
        Self {
            username: log.user.username.clone(),
            count: log.count(),
            id: log.user.id,
            from: query.from.map(format_display_date),
            to: query.to.map(format_display_date),
            log: log.log.iter().map(LogEntryResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_user_response_uses_underscore_id() {
        let user = User::new("alice");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["_id"], user.id.to_string());
        assert_eq!(json["username"], "alice");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_exercise_response_formats_date() {
        let user = User::new("bob");
        let exercise = Exercise::new("run", 30, date(1990, 1, 1));
        let response = ExerciseResponse::new(&user, &exercise);

        assert_eq!(response.date, "Mon Jan 01 1990");
        assert_eq!(response.duration, 30);
        assert_eq!(response.username, "bob");
    }

    #[test]
    fn test_log_response_omits_unused_bounds() {
        let log = ExerciseLog {
            user: User::new("carol"),
            log: vec![Exercise::new("swim", 20, date(2024, 6, 15))],
        };
        let json = serde_json::to_value(LogResponse::new(&log, &LogQuery::new())).unwrap();

        assert_eq!(json["count"], 1);
        assert!(json.get("from").is_none());
        assert!(json.get("to").is_none());
        assert_eq!(json["log"][0]["date"], "Sat Jun 15 2024");
    }

    #[test]
    fn test_log_response_includes_applied_bounds() {
        let log = ExerciseLog {
            user: User::new("dave"),
            log: Vec::new(),
        };
        let query = LogQuery::new()
            .with_from(date(2024, 1, 1))
            .with_to(date(2024, 1, 31));
        let response = LogResponse::new(&log, &query);

        assert_eq!(response.count, 0);
        assert_eq!(response.from.as_deref(), Some("Mon Jan 01 2024"));
        assert_eq!(response.to.as_deref(), Some("Wed Jan 31 2024"));
    }
}
