//! Game controller: turn alternation, time travel and the computer opponent.

use super::action::{Move, MoveError};
use super::history::{History, HistoryError};
use super::opponent::{self, OPPONENT};
use super::rules::{self, Winner};
use super::snapshot::Snapshot;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of an accepted [`GameSession::play`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The move requested by the caller.
    pub played: Move,
    /// The computer's reply, when versus-computer mode triggered one.
    pub reply: Option<Move>,
    /// Status of the board after both moves.
    pub status: GameStatus,
}

/// A single game with its full history and UI-facing flags.
///
/// The session is the only owner of its history. Whose turn it is follows
/// from the parity of the current step and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: History,
    reversed_history: bool,
    versus_computer: bool,
}

impl GameSession {
    /// Creates a session against the computer with chronological history.
    #[instrument]
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Creates a session with explicit mode flags.
    #[instrument]
    pub fn with_options(versus_computer: bool, reversed_history: bool) -> Self {
        Self {
            history: History::new(),
            reversed_history,
            versus_computer,
        }
    }

    /// Plays the active player's mark at `position`.
    ///
    /// Rejected when the current board already has a winner or the square
    /// is taken; a rejected move changes nothing. In versus-computer mode,
    /// a move by X that leaves the game open is answered by exactly one
    /// opponent move.
    #[instrument(skip(self), fields(step = self.history.step(), player = %self.next_player()))]
    pub fn play(&mut self, position: Position) -> Result<Turn, MoveError> {
        let played = self.apply(position)?;

        let reply = if self.versus_computer
            && played.player != OPPONENT
            && !self.status().is_over()
        {
            self.reply()
        } else {
            None
        };

        Ok(Turn {
            played,
            reply,
            status: self.status(),
        })
    }

    /// Validates and appends a single move for the player to move.
    fn apply(&mut self, position: Position) -> Result<Move, MoveError> {
        let action = Move::new(self.next_player(), position);
        if let Err(e) = action.validate(self.board()) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let board = self.board().with_mark(position, action.player);
        self.history.append(board, position);
        info!(%action, step = self.history.step(), "Move applied");
        Ok(action)
    }

    /// Computes and applies the opponent's move on the current board.
    fn reply(&mut self) -> Option<Move> {
        let position = opponent::select_move(self.board())?;
        match self.apply(position) {
            Ok(action) => Some(action),
            Err(e) => {
                debug!(error = %e, "Opponent move rejected");
                None
            }
        }
    }

    /// Moves the current step without discarding later moves.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.history.jump_to(step)?;
        debug!(next_player = %self.next_player(), "Jumped to step");
        Ok(())
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self))]
    pub fn toggle_reversed_history(&mut self) {
        self.reversed_history = !self.reversed_history;
    }

    /// Switches between playing the computer and two-player mode.
    #[instrument(skip(self))]
    pub fn toggle_versus_computer(&mut self) {
        self.versus_computer = !self.versus_computer;
        info!(versus_computer = self.versus_computer, "Mode changed");
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    /// Winner of the current board, if any.
    pub fn winner(&self) -> Option<Winner> {
        rules::check_winner(self.board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// True when the current board is full without a winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.board())
    }

    /// Player to move at the current step.
    pub fn next_player(&self) -> Player {
        self.history.next_player()
    }

    /// The move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the move list is shown newest first.
    pub fn reversed_history(&self) -> bool {
        self.reversed_history
    }

    /// Whether O is played by the computer.
    pub fn versus_computer(&self) -> bool {
        self.versus_computer
    }

    /// Read-only view of the session for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_replies_once() {
        let mut session = GameSession::new();
        let turn = session.play(Position::Center).unwrap();
        assert_eq!(turn.played, Move::new(Player::X, Position::Center));
        assert_eq!(turn.reply, Some(Move::new(Player::O, Position::TopLeft)));
        assert_eq!(turn.status, GameStatus::InProgress);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.next_player(), Player::X);
    }

    #[test]
    fn test_two_player_mode_alternates() {
        let mut session = GameSession::with_options(false, false);
        let turn = session.play(Position::Center).unwrap();
        assert_eq!(turn.reply, None);
        assert_eq!(session.next_player(), Player::O);
        let turn = session.play(Position::TopLeft).unwrap();
        assert_eq!(turn.played.player, Player::O);
        assert_eq!(session.next_player(), Player::X);
    }

    #[test]
    fn test_rejected_move_is_noop() {
        let mut session = GameSession::with_options(false, false);
        session.play(Position::Center).unwrap();
        let before = session.clone();
        assert_eq!(
            session.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_no_reply_when_player_wins() {
        let mut session = GameSession::with_options(false, false);
        // X: 0, 1 ; O: 3, 4
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            session.play(pos).unwrap();
        }
        session.toggle_versus_computer();
        let turn = session.play(Position::TopRight).unwrap();
        assert_eq!(turn.reply, None);
        assert_eq!(turn.status, GameStatus::Won(Player::X));
        assert_eq!(session.play(Position::BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_no_reply_after_o_move() {
        let mut session = GameSession::new();
        session.play(Position::Center).unwrap();
        // Back to the position where O was to move
        session.jump_to(1).unwrap();
        let turn = session.play(Position::BottomRight).unwrap();
        assert_eq!(turn.played.player, Player::O);
        assert_eq!(turn.reply, None);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_toggles() {
        let mut session = GameSession::new();
        assert!(session.versus_computer());
        assert!(!session.reversed_history());
        session.toggle_versus_computer();
        session.toggle_reversed_history();
        assert!(!session.versus_computer());
        assert!(session.reversed_history());
    }
}
