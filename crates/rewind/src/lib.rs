//! Rewind - tic-tac-toe with a clickable, rewindable move history.
//!
//! The game itself lives in [`rewind_tictactoe`]; this crate supplies the
//! surfaces around it.
//!
//! # Architecture
//!
//! - **TUI**: ratatui front end with mouse and keyboard input
//! - **Replay**: headless scripted play with text or JSON output
//! - **Config**: TOML file for display and logging preferences
//! - **Locale**: English and Korean labels
//!
//! # Example
//!
//! ```
//! use rewind::{Locale, ReplayScript, render_text};
//! use rewind_tictactoe::SortOrder;
//!
//! let game = ReplayScript::new(vec![0, 3, 1, 4, 2], None, false)
//!     .run(SortOrder::Ascending)
//!     .unwrap();
//! assert!(render_text(&game, Locale::English).contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod locale;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig};
pub use locale::Locale;
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayError, ReplayScript, Snapshot, SnapshotEntry, render_text};
pub use tui::app::{App, AppAction, Focus};
pub use tui::run_tui;
pub use tui::ui::{HitMap, Target, draw};
