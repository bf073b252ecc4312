//! CLI command definitions.

pub mod exercises;
pub mod health;
pub mod logs;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the exertrack API.
#[derive(Debug, Parser)]
#[command(name = "exertrack-client")]
#[command(about = "CLI client for the exertrack API", long_about = None)]
pub struct Cli {
    /// Server base URL. Falls back to `EXERTRACK_URL`, then `http://localhost:3000`.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User management.
    Users(users::UsersCommand),
    /// Add exercises to a user's log.
    Exercises(exercises::ExercisesCommand),
    /// Read exercise logs.
    Logs(logs::LogsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
