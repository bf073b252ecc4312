//! In-memory storage backend.
//!
//! Stores every user record (including its log) in a `HashMap` keyed by id,
//! plus a `Vec` of ids for creation order, all behind one `Arc<RwLock<_>>`.
//! Data is not persisted and is lost on restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use exertrack::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
