// src/presentation/cli/mod.rs
mod commands;

pub use commands::{execute, shutdown_signal};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "crafted", version)]
#[command(about = "Manage articles and consume article update messages", long_about = None)]
pub struct Cli {
    /// Overrides the `DATABASE_URL` environment variable
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply pending database migrations
    Migrate,

    /// List every article with its author
    List,

    /// Show one article
    Get { id: u64 },

    /// Manage authors
    Author {
        #[command(subcommand)]
        command: AuthorCommand,
    },

    /// Create an article for an existing author
    Create {
        #[arg(long)]
        author_id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },

    /// Replace an article's title and body
    Update {
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },

    /// Permanently delete one article
    Delete { id: u64 },

    /// Soft-delete EVERY article
    Purge {
        /// Confirm the table-wide soft delete
        #[arg(long)]
        yes: bool,
    },

    /// Consume update messages from the queue
    #[command(visible_alias = "c")]
    Consume,
}

#[derive(Debug, Subcommand)]
pub enum AuthorCommand {
    /// Register an author that articles can reference
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
}
