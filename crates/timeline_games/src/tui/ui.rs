//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{Player, Position, Snapshot, Square};

use super::app::{App, Focus};

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], &snapshot, app.cursor(), app.focus() == Focus::Board);
    draw_history(frame, body[1], &snapshot, app.selected(), app.focus() == Focus::History);

    let status = Paragraph::new(format!(
        "{}  |  Mode: {}  |  {}",
        snapshot.status_text(),
        snapshot.mode_label(),
        app.status_message()
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "1-9/Enter play  Tab move list  r order  m mode  n new game  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, focused: bool) {
    let block = panel("Board", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        let positions = [row * 3, row * 3 + 1, row * 3 + 2].map(|i| Position::ALL[i]);
        draw_row(frame, rows[row * 2], snapshot, cursor, focused, positions);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    focused: bool,
    positions: [Position; 3],
) {
    let mut spans = Vec::with_capacity(5);
    for (i, pos) in positions.into_iter().enumerate() {
        spans.push(cell(snapshot, pos, focused && pos == cursor));
        if i < 2 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cell(snapshot: &Snapshot, pos: Position, under_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match snapshot.board.get(pos) {
        Square::Empty => ("       ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "   X   ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "   O   ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.highlighted().contains(&pos) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_history(frame: &mut Frame, area: Rect, snapshot: &Snapshot, selected: usize, focused: bool) {
    let order = if snapshot.reversed_history {
        "newest first"
    } else {
        "oldest first"
    };

    let items: Vec<ListItem> = snapshot
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(panel(&format!("Moves ({order})"), focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
