//! Contract-based validation for history appends.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::history::History;
use super::invariants::{InvariantSet, HistoryInvariants};
use super::rules::detect_win;
use super::{Board, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Step Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Validates that moves are still accepted.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), MoveError> {
        if detect_win(history.current_board()).is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: `next` adds one mark, for the player to move, to an
/// empty square of the displayed board.
pub struct SingleLegalStep;

impl SingleLegalStep {
    /// Validates the shape of the step.
    #[instrument(skip(history, next))]
    pub fn check(history: &History, next: &Board) -> Result<(), MoveError> {
        let current = history.current_board();
        let changed = next.diff(current);

        let [pos] = changed.as_slice() else {
            warn!(changed = changed.len(), "Step does not change exactly one square");
            return Err(MoveError::InvariantViolation(format!(
                "expected exactly one changed square, found {}",
                changed.len()
            )));
        };

        if !current.is_empty(*pos) {
            return Err(MoveError::SquareOccupied(*pos));
        }

        match next.get(*pos) {
            Square::Occupied(player) if player == history.to_move() => Ok(()),
            Square::Occupied(player) => Err(MoveError::WrongPlayer(player)),
            Square::Empty => Err(MoveError::InvariantViolation(format!(
                "square {} was cleared",
                pos
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for appending a board to the history.
///
/// Preconditions:
/// - The displayed board has no winner
/// - The new board is a single legal step
///
/// Postconditions:
/// - Every history invariant holds
pub struct PlayContract;

impl Contract<History, Board> for PlayContract {
    fn pre(history: &History, next: &Board) -> Result<(), MoveError> {
        GameNotOver::check(history)?;
        SingleLegalStep::check(history, next)
    }

    fn post(_before: &History, after: &History) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
