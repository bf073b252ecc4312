//! Functional core for exertrack.
//!
//! Domain types, request validation, log filtering and the repository
//! contracts implemented by the server's storage backends. Nothing in this
//! crate performs I/O.

pub mod serde;
pub mod storage;
pub mod tracker;
