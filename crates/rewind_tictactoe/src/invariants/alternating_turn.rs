//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{History, Player, Square};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The mark added at entry `i` belongs to X for odd `i` and O for even
/// `i`. The first move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        (1..history.len()).all(|mv| {
            let expected = Player::for_move_count(mv - 1);
            history
                .changed_position(mv)
                .map(|pos| history.entries()[mv].get(pos) == Square::Occupied(expected))
                .unwrap_or(false)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
