//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "storyboard",
    version,
    about = "List, search, create, edit and delete stories on a remote store"
)]
pub struct Cli {
    /// Stories collection URL; overrides STORYBOARD_BASE_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "STORYBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files.
    #[arg(long, global = true, env = "STORYBOARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open the interactive story page (default).
    Tui,
    /// Print stories, optionally filtered.
    List {
        /// Case-insensitive substring of title or content.
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of cards.
        #[arg(long)]
        json: bool,
    },
    /// Create a story.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Replace title and content of a story.
    Edit {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a story.
    Delete { id: String },
}
