//! Single-step invariant: each entry adds exactly one mark.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: consecutive entries differ in exactly one square, and that
/// square was empty in the earlier entry.
///
/// Move descriptions rely on this to find the square a move filled.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history.entries().windows(2).all(|pair| {
            let changed = pair[1].diff(&pair[0]);
            changed.len() == 1 && pair[0].get(changed[0]) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_single_moves_hold() {
        let mut history = History::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            let next = history.current_board().with_mark(pos, history.to_move());
            history.play(next).unwrap();
        }
        assert!(SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_double_step_violates() {
        let mut history = History::new();
        let doubled = history.entries[0]
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        history.entries.push(doubled);
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_entry_violates() {
        let mut history = History::new();
        history.entries.push(history.entries[0]);
        assert!(!SingleStepInvariant::holds(&history));
    }
}
