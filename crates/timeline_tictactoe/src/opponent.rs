//! Rule-based computer opponent.
//!
//! The opponent always plays [`Player::O`]. It looks one ply ahead at most:
//! finish its own line if it can, otherwise block X's line, otherwise take
//! the first empty square. A player who sets up a fork can beat it.

use super::rules::LINES;
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// The mark the computer opponent plays.
pub const OPPONENT: Player = Player::O;

/// Picks the opponent's next move.
///
/// Priority order:
/// 1. a square that completes a line of `O`,
/// 2. a square that blocks a line of `X`,
/// 3. the first empty square by ascending index.
///
/// Returns `None` only when the board is full.
#[instrument]
pub fn select_move(board: &Board) -> Option<Position> {
    if let Some(pos) = completing_square(board, OPPONENT) {
        debug!(position = %pos, "Opponent completes a line");
        return Some(pos);
    }

    if let Some(pos) = completing_square(board, OPPONENT.opponent()) {
        debug!(position = %pos, "Opponent blocks a line");
        return Some(pos);
    }

    let fallback = board.empty_positions().next();
    debug!(position = ?fallback, "Opponent falls back to first empty square");
    fallback
}

/// Finds the empty square of the first line where `player` holds the other two.
#[instrument]
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let mut empty = None;
        let mut held = 0;
        for &pos in line {
            match board.get(pos) {
                Square::Empty => empty = Some(pos),
                Square::Occupied(p) if p == player => held += 1,
                Square::Occupied(_) => return None,
            }
        }
        if held == 2 { empty } else { None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_win_now() {
        assert_eq!(select_move(&board("OO. ... ...")), Some(Position::TopRight));
    }

    #[test]
    fn test_win_beats_block() {
        // X threatens the top row, O can finish the middle row
        assert_eq!(select_move(&board("XX. OO. ...")), Some(Position::MiddleRight));
    }

    #[test]
    fn test_block() {
        assert_eq!(select_move(&board("XX. O.. ...")), Some(Position::TopRight));
    }

    #[test]
    fn test_block_empty_square_first_in_line() {
        // X holds 1 and 2; the gap is index 0
        assert_eq!(select_move(&board(".XX ... O..")), Some(Position::TopLeft));
    }

    #[test]
    fn test_block_empty_square_middle_of_column() {
        assert_eq!(select_move(&board("X.. ..O X..")), Some(Position::MiddleLeft));
    }

    #[test]
    fn test_fallback_first_empty() {
        assert_eq!(select_move(&board("... .X. ...")), Some(Position::TopLeft));
        assert_eq!(select_move(&board("OX. .X. ...")), Some(Position::BottomCenter));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(select_move(&board("XOX OXX OXO")), None);
    }

    #[test]
    fn test_blocked_line_is_ignored() {
        // Top row has X, X, O: no win and no block there
        assert_eq!(completing_square(&board("XXO ... ..."), Player::X), None);
    }
}
