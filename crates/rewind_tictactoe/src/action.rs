//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::rules::detect_win;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Applies this move to `board`. See [`apply_move`].
    pub fn apply(&self, board: &Board) -> Result<Board, MoveError> {
        apply_move(board, self.position, self.player)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Places `player`'s mark at `position`, returning the new board.
///
/// Rejected when the square is occupied or the board already has a
/// winner. The input board is never modified.
#[instrument(skip(board), fields(position = ?position, player = ?player))]
pub fn apply_move(board: &Board, position: Position, player: Player) -> Result<Board, MoveError> {
    if detect_win(board).is_some() {
        debug!("Rejected: board already has a winner");
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(position) {
        debug!("Rejected: square occupied");
        return Err(MoveError::SquareOccupied(position));
    }

    Ok(board.with_mark(position, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_apply_to_empty_square() {
        let board: Board = "XO./.X./...".parse().unwrap();
        let next = apply_move(&board, Position::BottomRight, Player::X).unwrap();

        for pos in Position::ALL {
            if pos == Position::BottomRight {
                assert_eq!(next.get(pos), Square::Occupied(Player::X));
            } else {
                assert_eq!(next.get(pos), board.get(pos));
            }
        }
    }

    #[test]
    fn test_occupied_square_rejected() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let result = apply_move(&board, Position::Center, Player::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_rejected_after_win_even_on_empty_square() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            apply_move(&board, Position::BottomRight, Player::O),
            Err(MoveError::GameOver)
        );
        assert_eq!(
            apply_move(&board, Position::TopLeft, Player::O),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::O, Position::Center);
        assert_eq!(mv.to_string(), "O -> Center");
        assert_eq!(mv.apply(&Board::new()).unwrap().occupied_count(), 1);
    }
}
