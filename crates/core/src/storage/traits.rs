use async_trait::async_trait;
use uuid::Uuid;

use crate::tracker::{Exercise, ExerciseLog, LogQuery, User};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Lists all users in creation order.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a new user with an empty log.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Removes every user together with their logs.
    async fn clear_users(&self) -> Result<()>;
}

/// Repository for exercise log operations.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Appends an exercise to the user's log.
    ///
    /// Fails with `NotFound` if the user does not exist.
    async fn add_exercise(&self, user_id: Uuid, exercise: &Exercise) -> Result<()>;

    /// Gets the user's log narrowed by the query.
    ///
    /// Returns `None` if the user does not exist.
    async fn get_log(&self, user_id: Uuid, query: &LogQuery) -> Result<Option<ExerciseLog>>;
}
