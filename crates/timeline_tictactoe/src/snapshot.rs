//! Read-only view of a game session.
//!
//! Frontends render from a [`Snapshot`] and never touch the session
//! directly; every mutation goes back through [`GameSession`].

use super::rules::Winner;
use super::session::GameSession;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Chronological step this entry jumps to.
    pub step: usize,
    /// 1-based row of the square played to reach this step.
    pub row: Option<usize>,
    /// 1-based column of the square played to reach this step.
    pub column: Option<usize>,
    /// Whether this is the step currently shown.
    pub is_current: bool,
}

impl MoveEntry {
    fn new(step: usize, last_played: Option<Position>, current: usize) -> Self {
        Self {
            step,
            row: last_played.map(Position::row),
            column: last_played.map(Position::column),
            is_current: step == current,
        }
    }

    /// Button text for this entry.
    pub fn label(&self) -> String {
        match (self.step, self.row, self.column) {
            (0, _, _) | (_, None, _) | (_, _, None) => "Go to game start".to_string(),
            (step, Some(row), Some(column)) => format!("Go to move #{step} ({row}, {column})"),
        }
    }
}

/// Everything a frontend needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the current step.
    pub board: Board,
    /// Winning line on the current board.
    pub winner: Option<Winner>,
    /// Current board is full without a winner.
    pub is_draw: bool,
    /// Classification of the current board.
    pub status: GameStatus,
    /// Player to move at the current step.
    pub next_player: Player,
    /// Current step.
    pub step: usize,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Move list is newest first.
    pub reversed_history: bool,
    /// O is played by the computer.
    pub versus_computer: bool,
}

impl Snapshot {
    /// Builds the snapshot for `session`.
    ///
    /// Against the computer only even steps are listed: those are the
    /// positions where the human is to move. Reversal only changes the
    /// order of the list, never the steps the entries point at.
    pub fn from_session(session: &GameSession) -> Self {
        let history = session.history();
        let step = history.step();
        let versus_computer = session.versus_computer();

        let mut moves: Vec<MoveEntry> = history
            .records()
            .iter()
            .enumerate()
            .filter(|(i, _)| !versus_computer || i % 2 == 0)
            .map(|(i, record)| MoveEntry::new(i, *record.last_played(), step))
            .collect();

        if session.reversed_history() {
            moves.reverse();
        }

        Self {
            board: *session.board(),
            winner: session.winner(),
            is_draw: session.is_draw(),
            status: session.status(),
            next_player: session.next_player(),
            step,
            moves,
            reversed_history: session.reversed_history(),
            versus_computer,
        }
    }

    /// Status line: the winner, a draw, or whose turn it is.
    pub fn status_text(&self) -> String {
        if let Some(winner) = self.winner {
            format!("Winner: {}", winner.player)
        } else if self.is_draw {
            "Draw!".to_string()
        } else {
            format!("Next player: {}", self.next_player)
        }
    }

    /// Name of the current play mode.
    pub fn mode_label(&self) -> &'static str {
        if self.versus_computer {
            "Versus Computer"
        } else {
            "2 Player"
        }
    }

    /// Squares to highlight: the winning line, if any.
    pub fn highlighted(&self) -> &[Position] {
        match &self.winner {
            Some(winner) => &winner.line,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let snapshot = GameSession::new().snapshot();
        assert_eq!(snapshot.status_text(), "Next player: X");
        assert_eq!(snapshot.mode_label(), "Versus Computer");
        assert_eq!(snapshot.moves.len(), 1);
        assert_eq!(snapshot.moves[0].label(), "Go to game start");
        assert!(snapshot.moves[0].is_current);
        assert!(snapshot.highlighted().is_empty());
    }

    #[test]
    fn test_two_player_lists_every_step() {
        let mut session = GameSession::with_options(false, false);
        session.play(Position::Center).unwrap();
        session.play(Position::MiddleRight).unwrap();
        let snapshot = session.snapshot();
        let labels: Vec<_> = snapshot.moves.iter().map(MoveEntry::label).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1 (2, 2)", "Go to move #2 (2, 3)"]
        );
        assert_eq!(snapshot.mode_label(), "2 Player");
    }

    #[test]
    fn test_versus_computer_lists_even_steps() {
        let mut session = GameSession::new();
        session.play(Position::Center).unwrap();
        session.play(Position::BottomRight).unwrap();
        let steps: Vec<_> = session.snapshot().moves.iter().map(|m| m.step).collect();
        assert_eq!(steps, [0, 2, 4]);
    }

    #[test]
    fn test_reversed_keeps_steps() {
        let mut session = GameSession::with_options(false, true);
        session.play(Position::Center).unwrap();
        session.play(Position::TopLeft).unwrap();
        session.jump_to(1).unwrap();
        let snapshot = session.snapshot();
        let steps: Vec<_> = snapshot.moves.iter().map(|m| m.step).collect();
        assert_eq!(steps, [2, 1, 0]);
        assert!(snapshot.moves[1].is_current);
        assert_eq!(snapshot.board, Board::new().with_mark(Position::Center, Player::X));
    }

    #[test]
    fn test_winner_highlight_and_status() {
        let mut session = GameSession::with_options(false, false);
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            session.play(pos).unwrap();
        }
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status_text(), "Winner: X");
        assert_eq!(
            snapshot.highlighted(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
