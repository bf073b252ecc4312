//! User CLI commands.

use clap::{Parser, Subcommand};

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Create a new user.
    Create {
        /// Username.
        #[arg(long)]
        username: String,
    },
}
