//! Headless replay: scripted clicks in, a rendered position out.

use crate::locale::Locale;
use derive_getters::Getters;
use rewind_tictactoe::{Event, Game, Player, Position, SortOrder};
use serde::Serialize;
use tracing::{info, instrument};

/// A replay request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ReplayScript {
    /// Cell indices to click, 0-8.
    moves: Vec<usize>,
    /// Optional jump after the clicks.
    jump: Option<usize>,
    /// Force a newest-first move list.
    descending: bool,
}

impl ReplayScript {
    /// Creates a script.
    pub fn new(moves: Vec<usize>, jump: Option<usize>, descending: bool) -> Self {
        Self {
            moves,
            jump,
            descending,
        }
    }

    /// Converts the script into game events.
    ///
    /// Indices outside 0-8 are rejected. Illegal clicks are kept: the game
    /// ignores them exactly as it ignores them in the terminal UI.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn events(&self, initial: SortOrder) -> Result<Vec<Event>, ReplayError> {
        let mut events = self
            .moves
            .iter()
            .map(|&i| {
                Position::from_index(i)
                    .map(Event::ClickCell)
                    .ok_or(ReplayError::InvalidCell(i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(mv) = self.jump {
            events.push(Event::JumpTo(mv));
        }
        if self.descending && initial.is_ascending() {
            events.push(Event::ToggleSortOrder);
        }
        Ok(events)
    }

    /// Runs the script from a fresh game.
    #[instrument(skip(self))]
    pub fn run(&self, initial: SortOrder) -> Result<Game, ReplayError> {
        let game = Game::with_sort_order(initial).apply_all(self.events(initial)?);
        info!(current = game.current_move(), "Replay finished");
        Ok(game)
    }
}

/// Error building a replay.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A cell index outside 0-8.
    #[display("Cell {} is out of range (expected 0-8)", _0)]
    InvalidCell(usize),
}

impl std::error::Error for ReplayError {}

/// One move-list line in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    /// History index.
    pub number: usize,
    /// Localized text.
    pub label: String,
    /// True for the displayed move.
    pub is_current: bool,
    /// Row of the filled square, if this entry is a move.
    pub row: Option<usize>,
    /// Column of the filled square, if this entry is a move.
    pub col: Option<usize>,
}

/// Serializable view of a game, as the terminal UI would show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Squares in row-major order; `null` when empty.
    pub board: Vec<Option<Player>>,
    /// Localized status line.
    pub status: String,
    /// Winner, if a line is complete.
    pub winner: Option<Player>,
    /// Indices of the winning line.
    pub winning_line: Option<[usize; 3]>,
    /// Index of the displayed move.
    pub current_move: usize,
    /// Move-list order.
    pub sort_order: SortOrder,
    /// Localized sort toggle label.
    pub toggle_label: String,
    /// Move list in display order.
    pub moves: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Captures the derived views of `game`.
    #[instrument(skip(game))]
    pub fn capture(game: &Game, locale: Locale) -> Self {
        let winner = game.winner();
        Self {
            board: game.board().squares().iter().map(|s| s.player()).collect(),
            status: locale.status(&game.status()),
            winner: winner.map(|line| line.player),
            winning_line: winner.map(|line| line.indices()),
            current_move: game.current_move(),
            sort_order: game.sort_order(),
            toggle_label: locale.toggle_label(game.sort_order()).to_string(),
            moves: game
                .move_list()
                .iter()
                .map(|entry| {
                    let position = entry.description().position();
                    SnapshotEntry {
                        number: entry.number(),
                        label: locale.move_entry(entry),
                        is_current: *entry.is_current(),
                        row: position.map(Position::row),
                        col: position.map(Position::col),
                    }
                })
                .collect(),
        }
    }
}

/// Renders `game` as plain text: board, status, toggle and move list.
///
/// Move-list lines are numbered like an ordered list, counting down when
/// the list is newest first.
#[instrument(skip(game))]
pub fn render_text(game: &Game, locale: Locale) -> String {
    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&locale.status(&game.status()));
    out.push('\n');
    out.push_str(&format!("[{}]\n", locale.toggle_label(game.sort_order())));

    let list = game.move_list();
    let len = list.len();
    for (row, entry) in list.iter().enumerate() {
        let ordinal = if game.sort_order().is_ascending() {
            row + 1
        } else {
            len - row
        };
        out.push_str(&format!("{}. {}\n", ordinal, locale.move_entry(entry)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cell_rejected() {
        let script = ReplayScript::new(vec![0, 9], None, false);
        assert_eq!(
            script.run(SortOrder::Ascending),
            Err(ReplayError::InvalidCell(9))
        );
    }

    #[test]
    fn test_illegal_clicks_are_ignored() {
        let script = ReplayScript::new(vec![4, 4, 0], None, false);
        let game = script.run(SortOrder::Ascending).unwrap();
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_descending_flag_does_not_double_toggle() {
        let script = ReplayScript::new(vec![4], None, true);
        let game = script.run(SortOrder::Descending).unwrap();
        assert_eq!(game.sort_order(), SortOrder::Descending);

        let game = script.run(SortOrder::Ascending).unwrap();
        assert_eq!(game.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_snapshot_of_win() {
        let game = ReplayScript::new(vec![0, 3, 1, 4, 2], None, false)
            .run(SortOrder::Ascending)
            .unwrap();
        let snapshot = Snapshot::capture(&game, Locale::English);

        assert_eq!(snapshot.winner, Some(Player::X));
        assert_eq!(snapshot.winning_line, Some([0, 1, 2]));
        assert_eq!(snapshot.status, "Winner: X");
        assert_eq!(snapshot.moves.len(), 6);
        assert_eq!(snapshot.moves[5].label, "You are at move #5 (0, 2)");
        assert_eq!(snapshot.board[3], Some(Player::O));
        assert_eq!(snapshot.board[8], None);
    }

    #[test]
    fn test_render_text_descending_numbers() {
        let game = ReplayScript::new(vec![4, 0], None, true)
            .run(SortOrder::Ascending)
            .unwrap();
        let text = render_text(&game, Locale::English);

        assert!(text.contains("Next player: X"));
        assert!(text.contains("3. You are at move #2 (0, 0)"));
        assert!(text.contains("1. Go to game start"));
        let first = text.find("3. You are").unwrap();
        let last = text.find("1. Go to game start").unwrap();
        assert!(first < last);
    }
}
