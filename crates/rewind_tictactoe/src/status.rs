//! Derived game status.
//!
//! Status is never stored: it is recomputed from the board being shown
//! and the player whose turn it is at that point in history.

use super::rules::{WinningLine, detect_win, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted; `to_move` plays next.
    InProgress {
        /// Player whose turn it is.
        to_move: Player,
    },
    /// A player completed a line.
    Won(WinningLine),
    /// The board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` with `to_move` next to play.
    #[instrument]
    pub fn derive(board: &Board, to_move: Player) -> Self {
        if let Some(line) = detect_win(board) {
            GameStatus::Won(line)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { to_move }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Next player: {}", to_move),
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
