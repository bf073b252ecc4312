//! SQLite repository implementation.
//!
//! Implements the repository traits from `exertrack_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use exertrack_core::storage::{ExerciseRepository, RepositoryError, Result, UserRepository};
use exertrack_core::tracker::{Exercise, ExerciseLog, LogQuery, User};

use super::conversions::{format_date, format_datetime, row_to_exercise, row_to_user};
use super::error::map_tokio_rusqlite_error;
use super::query::build_log_query;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_USERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_user).map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", "*"))
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let id = user.id.to_string();
        let username = user.username.clone();
        let created_at = format_datetime(&Utc::now());
        let user_id = user.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![id, username, created_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", user_id))
    }

    async fn clear_users(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::DELETE_ALL).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", "*"))
    }
}

// ============================================================================
// ExerciseRepository implementation
// ============================================================================

#[async_trait]
impl ExerciseRepository for SqliteRepository {
    async fn add_exercise(&self, user_id: Uuid, exercise: &Exercise) -> Result<()> {
        let user_id_str = user_id.to_string();
        let description = exercise.description.clone();
        let duration = exercise.duration;
        let date = format_date(&exercise.date);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EXERCISE,
                    rusqlite::params![user_id_str, description, duration, date],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            // The foreign key on exercises.user_id reports a missing user.
            .map_err(|e| map_tokio_rusqlite_error(e, "Exercise", user_id.to_string()))
    }

    async fn get_log(&self, user_id: Uuid, query: &LogQuery) -> Result<Option<ExerciseLog>> {
        let id_str = user_id.to_string();
        let log_sql = build_log_query(user_id, query);

        self.conn
            .call(move |conn| {
                let user = {
                    let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                    match stmt.query_row([&id_str], row_to_user) {
                        Ok(user) => user,
                        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                        Err(e) => return Err(wrap_err(e)),
                    }
                };

                let mut log = Vec::new();
                if let Some(log_sql) = log_sql {
                    let mut stmt = conn.prepare(&log_sql.sql).map_err(wrap_err)?;
                    let rows = stmt
                        .query_map(
                            rusqlite::params_from_iter(log_sql.params.iter()),
                            row_to_exercise,
                        )
                        .map_err(wrap_err)?;
                    for row_result in rows {
                        log.push(row_result.map_err(wrap_err)?);
                    }
                }

                Ok(Some(ExerciseLog { user, log }))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    async fn repo_with_user(name: &str) -> (SqliteRepository, User) {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let user = User::new(name);
        repo.create_user(&user).await.unwrap();
        (repo, user)
    }

    #[tokio::test]
    async fn test_user_create_and_get() {
        let (repo, user) = repo_with_user("alice").await;

        let retrieved = repo.get_user(user.id).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_user_get_nonexistent() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        assert!(repo.get_user(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_create_duplicate() {
        let (repo, user) = repo_with_user("alice").await;

        let result = repo.create_user(&user).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.id.to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        for name in ["zed", "amy", "kim"] {
            repo.create_user(&User::new(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();

        assert_eq!(names, vec!["zed", "amy", "kim"]);
    }

    #[tokio::test]
    async fn test_add_exercise_to_missing_user() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let missing = Uuid::new_v4();

        let result = repo
            .add_exercise(missing, &Exercise::new("run", 10, date(2024, 1, 1)))
            .await;

        assert_eq!(result, Err(RepositoryError::user_not_found(missing)));
    }

    #[tokio::test]
    async fn test_get_log_for_missing_user() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let result = repo.get_log(Uuid::new_v4(), &LogQuery::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_log_filters_and_slices() {
        let (repo, user) = repo_with_user("bob").await;
        let dates = [
            date(2024, 1, 10),
            date(2024, 1, 5),
            date(2024, 1, 20),
            date(2024, 1, 15),
        ];
        for (i, d) in dates.iter().enumerate() {
            repo.add_exercise(user.id, &Exercise::new(format!("e{i}"), 10, *d))
                .await
                .unwrap();
        }

        let all = repo.get_log(user.id, &LogQuery::new()).await.unwrap().unwrap();
        assert_eq!(all.user, user);
        assert_eq!(all.count(), 4);
        assert_eq!(all.log[0].description, "e0");

        let bounded = LogQuery::new()
            .with_from(date(2024, 1, 10))
            .with_to(date(2024, 1, 20));
        let log = repo.get_log(user.id, &bounded).await.unwrap().unwrap();
        let names: Vec<&str> = log.log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["e0", "e2", "e3"]);

        let first = repo
            .get_log(user.id, &bounded.with_limit(2))
            .await
            .unwrap()
            .unwrap();
        let names: Vec<&str> = first.log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["e0", "e2"]);

        let last = repo
            .get_log(user.id, &bounded.with_limit(-2))
            .await
            .unwrap()
            .unwrap();
        let names: Vec<&str> = last.log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["e2", "e3"]);

        let none = repo
            .get_log(user.id, &LogQuery::new().with_limit(0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(none.count(), 0);
    }

    #[tokio::test]
    async fn test_sqlite_agrees_with_in_memory_filtering() {
        let (repo, user) = repo_with_user("carol").await;
        let entries: Vec<Exercise> = (1..=6)
            .map(|day| Exercise::new(format!("day {day}"), day * 5, date(2024, 3, day)))
            .collect();
        for entry in &entries {
            repo.add_exercise(user.id, entry).await.unwrap();
        }

        let query = LogQuery::new().with_from(date(2024, 3, 2)).with_limit(-3);
        let log = repo.get_log(user.id, &query).await.unwrap().unwrap();

        assert_eq!(log.log, query.apply(&entries));
    }

    #[tokio::test]
    async fn test_year_bounds_order_like_in_memory() {
        use exertrack_core::tracker::parse_date;

        assert_eq!(parse_date("+10000-01-01"), None);

        let (repo, user) = repo_with_user("erin").await;
        let entries = vec![
            Exercise::new("earliest", 5, parse_date("0001-01-01").unwrap()),
            Exercise::new("recent", 10, date(2024, 6, 1)),
            Exercise::new("latest", 15, parse_date("9999-12-31").unwrap()),
        ];
        for entry in &entries {
            repo.add_exercise(user.id, entry).await.unwrap();
        }

        for query in [
            LogQuery::new().with_from(date(2000, 1, 1)),
            LogQuery::new().with_to(date(2000, 1, 1)),
            LogQuery::new()
                .with_from(date(1, 1, 1))
                .with_to(date(9999, 12, 31))
                .with_limit(-2),
        ] {
            let log = repo.get_log(user.id, &query).await.unwrap().unwrap();
            assert_eq!(log.log, query.apply(&entries), "query: {query:?}");
        }
    }

    #[tokio::test]
    async fn test_clear_users_cascades_to_logs() {
        let (repo, user) = repo_with_user("dave").await;
        repo.add_exercise(user.id, &Exercise::new("run", 10, date(2024, 1, 1)))
            .await
            .unwrap();

        repo.clear_users().await.unwrap();

        assert!(repo.list_users().await.unwrap().is_empty());
        assert!(repo.get_log(user.id, &LogQuery::new()).await.unwrap().is_none());
    }
}
