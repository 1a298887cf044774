//! Terminal UI for rewind.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::Game;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use app::{App, AppAction};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting rewind TUI");

    let guard = TerminalGuard::new(io::stdout()).enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let game = Game::with_sort_order(*config.display().sort_order());
    let mut app = App::new(game, *config.display().locale());

    let res = run_app(&mut terminal, &mut app);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len().saturating_sub(1), "TUI closed");
    res
}

/// Raw mode, alternate screen and mouse capture, undone on drop.
///
/// Dropping restores the terminal on every exit path, including a failed
/// [`TerminalGuard::enter`].
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn enter(mut self) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(self)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Draw-then-poll loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut hits = ui::HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app))?;
        app.set_hit_map(hits);

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            TermEvent::Key(key) => app.handle_key(key),
            TermEvent::Mouse(mouse) => app.handle_mouse(mouse),
            other => {
                debug!(event = ?other, "Ignoring terminal event");
                AppAction::Continue
            }
        };

        if action == AppAction::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
