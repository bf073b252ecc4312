use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person whose exercises are being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    /// Creates a new user with a generated ID.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A single entry in a user's exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    /// Duration in minutes.
    pub duration: u32,
    pub date: NaiveDate,
}

impl Exercise {
    pub fn new(description: impl Into<String>, duration: u32, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            duration,
            date,
        }
    }
}

/// A user together with the portion of their log selected by a query.
///
/// Entries keep the order in which they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user: User,
    pub log: Vec<Exercise>,
}

impl ExerciseLog {
    /// Number of entries in the (possibly filtered) log.
    pub fn count(&self) -> usize {
        self.log.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new_generates_distinct_ids() {
        let a = User::new("alice");
        let b = User::new("alice");

        assert_eq!(a.username, "alice");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_with_id() {
        let id = Uuid::new_v4();
        let user = User::new("bob").with_id(id);

        assert_eq!(user.id, id);
    }

    #[test]
    fn test_exercise_log_count() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let log = ExerciseLog {
            user: User::new("carol"),
            log: vec![
                Exercise::new("run", 30, date),
                Exercise::new("swim", 45, date),
            ],
        };

        assert_eq!(log.count(), 2);
    }
}
