//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Board, Player, Position, rules};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

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

    /// Checks the move against a board without applying it.
    ///
    /// A move is legal when the board has no winner yet and the target
    /// square is empty. These are the only rules; turn order is derived
    /// from history and never supplied by the caller.
    #[instrument(skip(board))]
    pub fn validate(&self, board: &Board) -> Result<(), MoveError> {
        if rules::check_winner(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(self.position) {
            return Err(MoveError::SquareOccupied(self.position));
        }
        Ok(())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already over")]
    GameOver,
}
