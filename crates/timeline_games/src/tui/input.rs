//! Keyboard mapping for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use timeline_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Arrow key.
    Move(Direction),
    /// Enter or space on the focused element.
    Select,
    /// Digit 1-9: play that square directly.
    PlayAt(Position),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip move list order.
    ToggleOrder,
    /// Toggle versus-computer mode.
    ToggleMode,
    /// Start over.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up.
    Up,
    /// Down.
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

/// Maps a key event to an action, if it has one.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('r') => Some(Action::ToggleOrder),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlayAt),
        _ => None,
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.to_index() / 3, cursor.to_index() % 3);
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
