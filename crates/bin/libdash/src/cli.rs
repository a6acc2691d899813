//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use libdash_domain::id::CategoryId;

/// Library administration dashboard.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file; `libdash.toml` is used when present otherwise.
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to execute; defaults to `show`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print statistics, today's activity and the category list.
    #[default]
    Show,
    /// Create a category.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Editor recorded on the category; `Admin` when omitted.
        #[arg(long)]
        editor: Option<String>,
    },
    /// Update a category; omitted fields keep their current value.
    Update {
        id: CategoryId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        editor: Option<String>,
    },
    /// Archive (soft-delete) a category.
    Archive {
        id: CategoryId,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}
