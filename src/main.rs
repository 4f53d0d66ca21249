//! tictactoe command-line entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe::cli::{Cli, Command};
use tictactoe::{Console, PlayConfig, run_analyze, run_selfplay};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };

    // stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    debug!(?config, "Starting");

    match cli.command {
        Command::Play { side, show_scores } => run_play(config.with_overrides(side, show_scores)),
        Command::Selfplay => run_selfplay(&mut io::stdout().lock()).map(|_| ()),
        Command::Analyze { board, side } => {
            run_analyze(&board, side, &mut io::stdout().lock()).map(|_| ())
        }
    }
}

/// Runs the interactive console on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: PlayConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Console::new(stdin, stdout, &config).run()
}
