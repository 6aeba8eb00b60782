//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top-to-bottom, then columns left-to-right, then the two diagonals.
/// Both the win detector and the opponent scan in this order, which fixes
/// the tie-break when more than one line qualifies.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    /// Player owning all three squares.
    pub player: Player,
    /// The three positions of the line.
    pub line: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`LINES`] order whose squares are all held by
/// the same player, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Winner> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if sq == board.get(b)
            && sq == board.get(c)
            && let Square::Occupied(player) = sq
        {
            return Some(Winner { player, line });
        }
    }

    None
}
