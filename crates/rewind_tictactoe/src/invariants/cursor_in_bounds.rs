//! Cursor invariant: the displayed move exists.

use super::super::History;
use super::Invariant;

/// Invariant: `0 <= current_move < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing history entry"
    }
}
