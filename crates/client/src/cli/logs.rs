//! Log CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Log commands.
#[derive(Debug, Parser)]
pub struct LogsCommand {
    #[command(subcommand)]
    pub action: LogsAction,
}

/// Available log actions.
#[derive(Debug, Subcommand)]
pub enum LogsAction {
    /// Get a user's exercise log.
    Get {
        /// User ID.
        user_id: Uuid,
        /// Earliest date to include (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest date to include (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Keep the first N entries, or the last N when negative.
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
}
