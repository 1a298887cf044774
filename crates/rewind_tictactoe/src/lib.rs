//! Rewind Tic-Tac-Toe - game logic with a rewindable move history
//!
//! This crate holds the pure rules and session state. It has no terminal
//! or I/O dependencies; frontends drive it by feeding [`Event`]s to
//! [`Game::update`] and reading the derived views back.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a flat 9-square board
//! - **Actions**: move application with occupied-square and game-over checks
//! - **History**: a linear, overwritable timeline of board snapshots
//! - **Game**: the session reducer (history plus move-list order)
//! - **Invariants / contracts**: properties checked on every history append
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Event, Game, Player, Position};
//!
//! let game = Game::new()
//!     .update(Event::ClickCell(Position::TopLeft))
//!     .update(Event::ClickCell(Position::Center))
//!     .update(Event::JumpTo(1));
//!
//! assert_eq!(game.current_move(), 1);
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.move_list().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod status;
mod types;

pub use action::{Move, MoveError, apply_move};
pub use contracts::{Contract, GameNotOver, PlayContract, SingleLegalStep};
pub use game::{Event, Game, MoveListEntry, SortOrder};
pub use history::{History, HistoryError, MoveDescription};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, SingleStepInvariant, StartsEmptyInvariant,
};
pub use position::Position;
pub use rules::{LINES, WinningLine, check_winner, detect_win, is_draw, is_full};
pub use status::GameStatus;
pub use types::{Board, BoardParseError, Player, Square};
