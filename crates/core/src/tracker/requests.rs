//! API request types for user and exercise operations.
//!
//! These types are shared between the server and client. Form fields arrive
//! as strings; validation turns them into domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::parse_date;
use super::error::ValidationError;
use super::types::{Exercise, User};
use crate::serde::deserialize_optional_string;

/// Request payload for creating a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

impl CreateUserRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Validates the payload and builds a new user with a fresh ID.
    ///
    /// Blank usernames are rejected; otherwise the name is kept as submitted.
    pub fn validate(self) -> Result<User, ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        Ok(User::new(self.username))
    }
}

/// Request payload for adding an exercise to a user's log.
///
/// `duration` stays a string so the server can report exactly what was sent
/// when it is not a whole, non-negative number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

impl CreateExerciseRequest {
    pub fn new(description: impl Into<String>, duration: u32) -> Self {
        Self {
            description: description.into(),
            duration: duration.to_string(),
            date: None,
        }
    }

    /// Set the exercise date (any format accepted by [`parse_date`]).
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Validates the payload, defaulting the date to `today` when omitted.
    pub fn into_exercise(self, today: NaiveDate) -> Result<Exercise, ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let duration = parse_duration(&self.duration)?;

        let date = match self.date.as_deref() {
            None => today,
            Some(raw) => {
                parse_date(raw).ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))?
            }
        };

        Ok(Exercise::new(self.description, duration, date))
    }
}

/// Largest accepted duration: durations are stored as signed 32-bit integers.
pub const MAX_DURATION: u32 = i32::MAX as u32;

/// Parses a duration in minutes. Must be a whole number in `0..=MAX_DURATION`.
fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingDuration);
    }
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|minutes| *minutes <= MAX_DURATION)
        .ok_or_else(|| ValidationError::InvalidDuration(trimmed.to_string()))
}
