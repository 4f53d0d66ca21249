//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, Side};

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Side to play (x or o); asked for when omitted
        #[arg(long)]
        side: Option<Side>,

        /// Show the score of every move the AI considered
        #[arg(long)]
        show_scores: bool,
    },

    /// Let the AI play both sides from an empty board
    Selfplay,

    /// Score every legal move on a board
    Analyze {
        /// Nine cells row by row: X, O and . (separators / | allowed)
        board: Board,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(long)]
        side: Option<Side>,
    },
}
