//! Exercise CLI commands.

use clap::{Parser, Subcommand};
use exertrack_core::tracker::MAX_DURATION;
use uuid::Uuid;

/// Exercise commands.
#[derive(Debug, Parser)]
pub struct ExercisesCommand {
    #[command(subcommand)]
    pub action: ExercisesAction,
}

/// Available exercise actions.
#[derive(Debug, Subcommand)]
pub enum ExercisesAction {
    /// Add an exercise to a user's log.
    Add {
        /// User ID.
        user_id: Uuid,
        /// What was done.
        #[arg(long)]
        description: String,
        /// Duration in minutes.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DURATION)))]
        duration: u32,
        /// Date (YYYY-MM-DD, YYYY/MM/DD or RFC 3339). Defaults to today on the server.
        #[arg(long)]
        date: Option<String>,
    },
}
