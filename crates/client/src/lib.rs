//! exertrack_client - HTTP client and CLI for the exertrack API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ExertrackClient;
pub use error::{ClientError, Result};
