//! One-shot analysis of a board for the `suggest` command.

use timeline_tictactoe::{Board, BoardParseError, GameStatus, opponent, rules};
use tracing::instrument;

/// Parses `input` and describes the board, its status and the computer's move.
#[instrument]
pub fn suggest(input: &str) -> Result<String, BoardParseError> {
    let board: Board = input.parse()?;

    let status = match rules::status(&board) {
        GameStatus::InProgress => "in progress".to_string(),
        GameStatus::Won(player) => format!("won by {player}"),
        GameStatus::Draw => "draw".to_string(),
    };

    let advice = match opponent::select_move(&board) {
        Some(pos) => format!(
            "Computer (O) plays {} (square {}, row {}, column {})",
            pos.label(),
            pos.to_index() + 1,
            pos.row(),
            pos.column()
        ),
        None => "Board is full; no move available".to_string(),
    };

    Ok(format!("{}\n\nStatus: {status}\n{advice}", board.display()))
}
