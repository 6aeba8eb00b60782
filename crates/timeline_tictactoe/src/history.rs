//! Versioned move history with time travel.
//!
//! History is a list of board snapshots with a cursor. Jumping moves the
//! cursor only; appending after a jump drops every record past the cursor.

use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the history: the board after a move and the square played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board after the move.
    board: Board,
    /// Square played to reach this board; `None` for the starting record.
    last_played: Option<Position>,
}

impl MoveRecord {
    /// The starting record: empty board, nothing played.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_played: None,
        }
    }
}

/// Error returned when jumping to a step that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range for history of length {}", step, len)]
pub struct HistoryError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}

/// Append-only list of move records with a current-step cursor.
///
/// Invariant: `step < records.len()`, and `records` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
    step: usize,
}

impl History {
    /// Creates a history holding only the starting record.
    #[instrument]
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
            step: 0,
        }
    }

    /// All records, oldest first, including any past the cursor.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a history holds at least the starting record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the active record.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The active record.
    pub fn current(&self) -> &MoveRecord {
        &self.records[self.step]
    }

    /// Player to move at the active record. X moves on even steps.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 { Player::X } else { Player::O }
    }

    /// Records a new board played at `position`.
    ///
    /// Records after the cursor are discarded first, so a move made after
    /// jumping back replaces the old future.
    #[instrument(skip(self, board), fields(step = self.step, len = self.records.len()))]
    pub fn append(&mut self, board: Board, position: Position) {
        let discarded = self.records.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future records");
        }
        self.records.truncate(self.step + 1);
        self.records.push(MoveRecord {
            board,
            last_played: Some(position),
        });
        self.step = self.records.len() - 1;
    }

    /// Moves the cursor to `step` without touching the records.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.records.len() {
            return Err(HistoryError {
                step,
                len: self.records.len(),
            });
        }
        self.step = step;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
