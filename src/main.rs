//! tictactoe_history - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{parse_script, render_text, replay, run_tui, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Play {
        log_file: None,
        no_hints: false,
    }) {
        Command::Play { log_file, no_hints } => {
            let mut settings = settings;
            if let Some(path) = log_file {
                settings = settings.with_log_file(path);
            }
            if no_hints {
                settings = settings.with_show_hints(false);
            }
            run_play(settings, cli.log_filter)
        }
        Command::Replay { script, json } => run_replay(&settings, cli.log_filter, &script, json),
    }
}

/// Picks the filter: CLI flag, then `RUST_LOG`, then the settings file.
fn env_filter(settings: &Settings, cli_filter: Option<String>) -> EnvFilter {
    match cli_filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
    }
}

/// Run the terminal UI, logging to a file so output does not corrupt the screen.
fn run_play(settings: Settings, cli_filter: Option<String>) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings, cli_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    run_tui(&settings)
}

/// Apply a move script headlessly and print the resulting game.
fn run_replay(
    settings: &Settings,
    cli_filter: Option<String>,
    script: &str,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings, cli_filter))
        .with_writer(std::io::stderr)
        .init();

    replay_script(script, json)
}

#[instrument(skip(script))]
fn replay_script(script: &str, json: bool) -> Result<()> {
    let intents = parse_script(script)?;
    info!(intents = intents.len(), "Replaying script");

    let state = replay(&intents);
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_text(&state));
    }
    Ok(())
}
