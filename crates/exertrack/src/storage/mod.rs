//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `exertrack_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p exertrack --no-default-features --features sqlite
//! ```

// The in-memory backend also backs the router tests, whatever feature is on.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
