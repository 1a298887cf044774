//! Linear move history with time travel.
//!
//! The history is a single overwritable timeline of board snapshots.
//! Entry 0 is always the empty board and every later entry adds exactly
//! one mark to its predecessor. Jumping back truncates the timeline, so a
//! different move played from an earlier point permanently replaces the
//! old continuation.

use super::action::MoveError;
use super::contracts::{Contract, PlayContract};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Errors from history navigation and appends.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// A jump target past the end of the history.
    #[display("Move {} is out of range (history has {} entries)", requested, len)]
    OutOfRange {
        /// The requested move number.
        requested: usize,
        /// Number of entries in the history.
        len: usize,
    },

    /// The appended board is not a single legal step from the current one.
    #[display("Illegal history step: {}", _0)]
    IllegalStep(MoveError),

    /// A loaded history that breaks one or more history invariants.
    #[display("Inconsistent history: {}", _0)]
    Inconsistent(String),
}

impl std::error::Error for HistoryError {}

/// What a history entry represents, for the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDescription {
    /// Entry 0, the empty board.
    GameStart,
    /// Entry `number`, created by a mark at `position`.
    Move {
        /// Move number (1-based; equals the history index).
        number: usize,
        /// The square filled by this move.
        position: Position,
    },
}

impl MoveDescription {
    /// Move number of the entry (0 for the game start).
    pub fn number(&self) -> usize {
        match self {
            MoveDescription::GameStart => 0,
            MoveDescription::Move { number, .. } => *number,
        }
    }

    /// Position filled by the move, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveDescription::GameStart => None,
            MoveDescription::Move { position, .. } => Some(*position),
        }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::GameStart => write!(f, "Go to game start"),
            MoveDescription::Move { number, position } => write!(
                f,
                "Go to move #{} ({}, {})",
                number,
                position.row(),
                position.col()
            ),
        }
    }
}

/// Ordered board snapshots plus the index of the displayed one.
///
/// Deserialization checks [`HistoryInvariants`], so a loaded history is
/// as well-formed as one built by [`History::play`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    pub(crate) entries: Vec<Board>,
    pub(crate) current: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRecord {
    entries: Vec<Board>,
    current: usize,
}

impl TryFrom<HistoryRecord> for History {
    type Error = HistoryError;

    #[instrument(skip(record), fields(len = record.entries.len(), current = record.current))]
    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let history = Self {
            entries: record.entries,
            current: record.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            warn!(violations = ?descriptions, "Rejected inconsistent history");
            HistoryError::Inconsistent(descriptions.join("; "))
        })?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
            current: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Number of entries, including the initial empty board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a history with no entries, which neither
    /// [`History::new`] nor deserialization will produce.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the displayed entry.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.entries[self.current]
    }

    /// True when X plays next from the displayed entry.
    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// Player who plays next from the displayed entry.
    pub fn to_move(&self) -> Player {
        Player::for_move_count(self.current)
    }

    /// Appends `next` after the displayed entry.
    ///
    /// Entries beyond the displayed one are discarded first. `next` must add
    /// exactly one mark, for the player to move, to an empty square of the
    /// displayed board; otherwise the history is left untouched.
    #[instrument(skip(self, next), fields(current = self.current, len = self.entries.len()))]
    pub fn play(&mut self, next: Board) -> Result<(), HistoryError> {
        PlayContract::pre(self, &next).map_err(HistoryError::IllegalStep)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let discarded = self.entries.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding entries past the current move");
        }
        self.entries.truncate(self.current + 1);
        self.entries.push(next);
        self.current = self.entries.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            *self = before;
            return Err(HistoryError::IllegalStep(e));
        }

        info!(current = self.current, "Move recorded");
        Ok(())
    }

    /// Makes entry `mv` the displayed one, discarding everything after it.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, mv: usize) -> Result<(), HistoryError> {
        if mv >= self.entries.len() {
            return Err(HistoryError::OutOfRange {
                requested: mv,
                len: self.entries.len(),
            });
        }

        self.entries.truncate(mv + 1);
        self.current = mv;
        info!(current = mv, "Jumped to move");
        Ok(())
    }

    /// The square filled at entry `mv`, if `mv` is a move.
    pub fn changed_position(&self, mv: usize) -> Option<Position> {
        if mv == 0 {
            return None;
        }
        let (prev, this) = (self.entries.get(mv - 1)?, self.entries.get(mv)?);
        this.diff(prev).first().copied()
    }

    /// Describes entry `mv`, or `None` if it does not exist.
    pub fn describe(&self, mv: usize) -> Option<MoveDescription> {
        if mv >= self.entries.len() {
            return None;
        }
        if mv == 0 {
            return Some(MoveDescription::GameStart);
        }
        self.changed_position(mv)
            .map(|position| MoveDescription::Move { number: mv, position })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
