//! Application state and logic.

use super::input::{Action, Direction, move_cursor};
use timeline_tictactoe::{GameSession, Position, Snapshot};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    /// Index into the displayed move list.
    selected: usize,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh session.
    #[instrument]
    pub fn new(versus_computer: bool, reversed_history: bool) -> Self {
        Self {
            session: GameSession::with_options(versus_computer, reversed_history),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            status_message: "Arrows move, Enter plays, Tab switches to the move list".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Snapshot of the session for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected index in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Move(direction) => self.move_focus(direction),
            Action::Select => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            Action::PlayAt(position) => {
                self.cursor = position;
                self.play(position);
            }
            Action::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            Action::ToggleOrder => {
                self.session.toggle_reversed_history();
                self.select_current();
                self.status_message = if self.session.reversed_history() {
                    "Move list: newest first".to_string()
                } else {
                    "Move list: oldest first".to_string()
                };
            }
            Action::ToggleMode => {
                self.session.toggle_versus_computer();
                self.select_current();
                self.status_message = format!("Mode: {}", self.snapshot().mode_label());
            }
            Action::NewGame => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn move_focus(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let len = self.snapshot().moves.len();
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(len - 1),
                };
            }
        }
    }

    fn play(&mut self, position: Position) {
        match self.session.play(position) {
            Ok(turn) => {
                self.status_message = match turn.reply {
                    Some(reply) => format!("{} | {}", turn.played, reply),
                    None => turn.played.to_string(),
                };
                self.select_current();
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected move");
                self.status_message = e.to_string();
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.snapshot().moves.get(self.selected).copied() else {
            return;
        };
        match self.session.jump_to(entry.step) {
            Ok(()) => self.status_message = entry.label(),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Points the move-list selection at the current step, or the nearest
    /// listed entry when the current step is hidden.
    fn select_current(&mut self) {
        let snapshot = self.snapshot();
        self.selected = snapshot
            .moves
            .iter()
            .position(|m| m.is_current)
            .unwrap_or_else(|| {
                snapshot
                    .moves
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, m)| m.step.abs_diff(snapshot.step))
                    .map_or(0, |(i, _)| i)
            });
    }

    /// Restarts the game, keeping the mode flags.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session = GameSession::with_options(
            self.session.versus_computer(),
            self.session.reversed_history(),
        );
        self.cursor = Position::Center;
        self.selected = 0;
        self.status_message = "New game. Player X's turn.".to_string();
    }
}
