//! The game session as a value.
//!
//! [`Game`] owns the history and the move-list order. Every user action is
//! an [`Event`]; [`Game::update`] consumes the current game and returns the
//! next one. Illegal actions return the game unchanged.

use super::action::Move;
use super::history::{History, MoveDescription};
use super::rules::{WinningLine, detect_win};
use super::status::GameStatus;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// A user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A board cell was clicked.
    ClickCell(Position),
    /// A move-list entry was clicked.
    JumpTo(usize),
    /// The sort toggle was clicked.
    ToggleSortOrder,
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// What the entry represents.
    description: MoveDescription,
    /// True for the displayed move; rendered as an indicator, not a link.
    is_current: bool,
}

impl MoveListEntry {
    /// History index of the entry.
    pub fn number(&self) -> usize {
        self.description.number()
    }
}

/// A tic-tac-toe session with time travel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    history: History,
    order: SortOrder,
}

impl Game {
    /// Creates a game at the empty board with an ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game with the given initial move-list order.
    #[instrument]
    pub fn with_sort_order(order: SortOrder) -> Self {
        Self {
            history: History::new(),
            order,
        }
    }

    /// Applies one event and returns the resulting game.
    #[instrument(skip(self), fields(current = self.history.current_move()))]
    pub fn update(mut self, event: Event) -> Self {
        match event {
            Event::ClickCell(pos) => {
                let mv = Move::new(self.history.to_move(), pos);
                let next = match mv.apply(self.history.current_board()) {
                    Ok(next) => next,
                    Err(e) => {
                        debug!(%mv, error = %e, "Click ignored");
                        return self;
                    }
                };
                if let Err(e) = self.history.play(next) {
                    debug!(%mv, error = %e, "Move not recorded");
                }
            }
            Event::JumpTo(mv) => {
                if let Err(e) = self.history.jump_to(mv) {
                    debug!(error = %e, "Jump ignored");
                }
            }
            Event::ToggleSortOrder => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Sort order toggled");
            }
        }
        self
    }

    /// Applies events in order.
    pub fn apply_all(self, events: impl IntoIterator<Item = Event>) -> Self {
        events.into_iter().fold(self, Game::update)
    }

    /// The move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    /// Index of the displayed move.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// Player to move from the displayed position.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Move-list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// The completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        detect_win(self.board())
    }

    /// Status of the displayed position.
    pub fn status(&self) -> GameStatus {
        GameStatus::derive(self.board(), self.to_move())
    }

    /// Checks if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winner().is_some_and(|line| line.contains(pos))
    }

    /// Move-list entries in display order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let current = self.history.current_move();
        let mut entries: Vec<MoveListEntry> = (0..self.history.len())
            .filter_map(|mv| self.history.describe(mv))
            .map(|description| MoveListEntry {
                is_current: description.number() == current,
                description,
            })
            .collect();

        if !self.order.is_ascending() {
            entries.reverse();
        }
        entries
    }
}
