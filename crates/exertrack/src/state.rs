//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and selects the backend via feature flags.

use std::sync::Arc;

use exertrack_core::storage::{ExerciseRepository, UserRepository};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

/// Shared application state.
///
/// Cloned for each request handler. Both repositories usually point at the
/// same backend instance.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
    pub exercise_repo: Arc<dyn ExerciseRepository>,
}

impl AppState {
    fn build(
        user_repo: Arc<dyn UserRepository>,
        exercise_repo: Arc<dyn ExerciseRepository>,
    ) -> Self {
        Self {
            user_repo,
            exercise_repo,
        }
    }

    /// Deletes every user and their logs.
    pub async fn reset(&self) -> Result<(), anyhow::Error> {
        self.user_repo.clear_users().await?;
        tracing::info!("Storage reset: all users and logs removed");
        Ok(())
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState backed by a SQLite database file.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
            Ok(Self::build(repo.clone(), repo))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Data does not survive a restart.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            tracing::info!("Using in-memory storage");
            Ok(Self::build(repo.clone(), repo))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        let repo = Arc::new(crate::storage::InMemoryRepository::new());
        Self::build(repo.clone(), repo)
    }
}
