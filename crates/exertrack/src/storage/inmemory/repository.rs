//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use exertrack_core::storage::{ExerciseRepository, RepositoryError, Result, UserRepository};
use exertrack_core::tracker::{Exercise, ExerciseLog, LogQuery, User};

/// A user document: the user plus their full log in insertion order.
#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    log: Vec<Exercise>,
}

#[derive(Debug, Default)]
struct Store {
    users: HashMap<Uuid, UserRecord>,
    /// Creation order of `users`.
    order: Vec<Uuid>,
}

/// In-memory storage backend.
///
/// Uses a single `Store` behind `Arc<RwLock<_>>` so a user and their log are
/// always read and written together.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).map(|record| record.user.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.users.get(id))
            .map(|record| record.user.clone())
            .collect())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut store = self.store.write().await;
        if store.users.contains_key(&user.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.id.to_string(),
            });
        }
        store.users.insert(
            user.id,
            UserRecord {
                user: user.clone(),
                log: Vec::new(),
            },
        );
        store.order.push(user.id);
        Ok(())
    }

    async fn clear_users(&self) -> Result<()> {
        let mut store = self.store.write().await;
        store.users.clear();
        store.order.clear();
        Ok(())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryRepository {
    async fn add_exercise(&self, user_id: Uuid, exercise: &Exercise) -> Result<()> {
        let mut store = self.store.write().await;
        let record = store
            .users
            .get_mut(&user_id)
            .ok_or_else(|| RepositoryError::user_not_found(user_id))?;
        record.log.push(exercise.clone());
        Ok(())
    }

    async fn get_log(&self, user_id: Uuid, query: &LogQuery) -> Result<Option<ExerciseLog>> {
        let store = self.store.read().await;
        Ok(store.users.get(&user_id).map(|record| ExerciseLog {
            user: record.user.clone(),
            log: query.apply(&record.log),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // Helper to create test dates
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==================== User Tests ====================

    #[tokio::test]
    async fn test_user_create_and_get() {
        let repo = InMemoryRepository::new();
        let user = User::new("alice");

        repo.create_user(&user).await.unwrap();

        let retrieved = repo.get_user(user.id).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_user_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_user(Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_user_create_duplicate() {
        let repo = InMemoryRepository::new();
        let user = User::new("alice");

        repo.create_user(&user).await.unwrap();
        let result = repo.create_user(&user).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let repo = InMemoryRepository::new();
        for name in ["carol", "alice", "bob"] {
            repo.create_user(&User::new(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();

        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }

    #[tokio::test]
    async fn test_clear_users_removes_users_and_logs() {
        let repo = InMemoryRepository::new();
        let user = User::new("alice");
        repo.create_user(&user).await.unwrap();
        repo.add_exercise(user.id, &Exercise::new("run", 10, date(2024, 1, 1)))
            .await
            .unwrap();

        repo.clear_users().await.unwrap();

        assert!(repo.list_users().await.unwrap().is_empty());
        assert!(repo
            .get_log(user.id, &LogQuery::new())
            .await
            .unwrap()
            .is_none());
    }

    // ==================== Exercise Tests ====================

    #[tokio::test]
    async fn test_add_exercise_to_missing_user() {
        let repo = InMemoryRepository::new();
        let result = repo
            .add_exercise(Uuid::new_v4(), &Exercise::new("run", 10, date(2024, 1, 1)))
            .await;

        assert!(matches!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "User",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_get_log_keeps_insertion_order() {
        let repo = InMemoryRepository::new();
        let user = User::new("alice");
        repo.create_user(&user).await.unwrap();

        repo.add_exercise(user.id, &Exercise::new("late", 10, date(2024, 3, 1)))
            .await
            .unwrap();
        repo.add_exercise(user.id, &Exercise::new("early", 20, date(2024, 1, 1)))
            .await
            .unwrap();

        let log = repo
            .get_log(user.id, &LogQuery::new())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(log.user, user);
        assert_eq!(log.count(), 2);
        assert_eq!(log.log[0].description, "late");
        assert_eq!(log.log[1].description, "early");
    }

    #[tokio::test]
    async fn test_get_log_applies_query() {
        let repo = InMemoryRepository::new();
        let user = User::new("bob");
        repo.create_user(&user).await.unwrap();

        for day in 1..=5 {
            repo.add_exercise(user.id, &Exercise::new(format!("day {day}"), 10, date(2024, 1, day)))
                .await
                .unwrap();
        }

        let query = LogQuery::new()
            .with_from(date(2024, 1, 2))
            .with_to(date(2024, 1, 4))
            .with_limit(-2);
        let log = repo.get_log(user.id, &query).await.unwrap().unwrap();

        let descriptions: Vec<&str> = log.log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["day 3", "day 4"]);
    }

    #[tokio::test]
    async fn test_logs_are_per_user() {
        let repo = InMemoryRepository::new();
        let alice = User::new("alice");
        let bob = User::new("bob");
        repo.create_user(&alice).await.unwrap();
        repo.create_user(&bob).await.unwrap();

        repo.add_exercise(alice.id, &Exercise::new("run", 10, date(2024, 1, 1)))
            .await
            .unwrap();

        let bob_log = repo.get_log(bob.id, &LogQuery::new()).await.unwrap().unwrap();
        assert_eq!(bob_log.count(), 0);
    }
}
