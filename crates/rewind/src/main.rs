//! Rewind - unified CLI
//!
//! Play interactively, or replay a scripted game headlessly.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind::{
    Cli, Command, Config, Locale, ReplayScript, Snapshot, init_file_logging, init_stderr_logging,
    render_text, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(locale) = cli.locale {
        let display = config.display().clone().with_locale(locale);
        config = config.with_display(display);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(&config, ReplayScript::new(moves, jump, descending), json),
    }
}

/// Run the terminal UI
fn run_play(config: &Config) -> Result<()> {
    init_file_logging(config.logging())?;
    run_tui(config)
}

/// Replay a script and print the resulting position
#[instrument(skip(config, script))]
fn run_replay(config: &Config, script: ReplayScript, json: bool) -> Result<()> {
    init_stderr_logging(config.logging());

    let locale: Locale = *config.display().locale();
    let game = script.run(*config.display().sort_order())?;
    info!(moves = game.history().len().saturating_sub(1), "Replay complete");

    if json {
        let snapshot = Snapshot::capture(&game, locale);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text(&game, locale));
    }
    Ok(())
}
