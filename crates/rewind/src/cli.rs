//! Command-line interface for rewind.

use crate::locale::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a clickable, rewindable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "rewind.toml", global = true)]
    pub config: PathBuf,

    /// Override the configured label language
    #[arg(long, value_enum, global = true)]
    pub locale: Option<Locale>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a scripted sequence of clicks and print the result
    Replay {
        /// Cells to click in order, 0-8 row-major (e.g. 0,3,1,4,2)
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this move after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
