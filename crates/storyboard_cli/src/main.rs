//! Storyboard: a single-page story manager for the terminal.
//!
//! Runs the interactive page by default; subcommands cover scripted use.

mod cli;
mod commands;
mod tui;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, CliCommand};
use directories::ProjectDirs;
use std::path::PathBuf;
use storyboard_core::{init_logging, HttpStoryStore, LogLevel, StoreConfig, StoryService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    start_logging(&cli);

    let mut config = StoreConfig::from_env().context("reading store configuration")?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    let service = StoryService::new(HttpStoryStore::new(&config)?);
    log::info!(
        "event=cli_start module=cli status=ok base_url={} core_version={}",
        config.base_url,
        storyboard_core::core_version()
    );

    match cli.command.unwrap_or(CliCommand::Tui) {
        CliCommand::Tui => tui::run(service).await,
        CliCommand::List { search, json } => {
            commands::list(&service, search.as_deref().unwrap_or(""), json).await
        }
        CliCommand::Add { title, content } => commands::add(&service, title, content).await,
        CliCommand::Edit { id, title, content } => {
            commands::edit(&service, id, title, content).await
        }
        CliCommand::Delete { id } => commands::delete(&service, id).await,
    }
}

// Logging problems must not block story work; report and continue.
fn start_logging(cli: &Cli) {
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| LogLevel::build_default().as_str().to_string());
    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);

    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("storyboard: logging disabled: {err}");
    }
}

fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "storyboard")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("storyboard-logs"))
}
