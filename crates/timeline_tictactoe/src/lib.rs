//! Pure tic-tac-toe logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: win detection and full-board checks over a fixed line order
//! - **Opponent**: one-ply win/block/fallback move selection for O
//! - **History**: board snapshots with a cursor; jumping never discards
//! - **Session**: the controller tying turns, history and the opponent together
//! - **Snapshot**: read-only view a frontend renders from
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Board, GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! let turn = session.play(Position::Center).unwrap();
//! assert_eq!(turn.reply.map(|m| m.position), Some(Position::TopLeft));
//! assert_eq!(session.next_player(), Player::X);
//! assert_eq!(
//!     *session.board(),
//!     "O.. .X. ...".parse::<Board>().unwrap()
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod position;
mod session;
mod snapshot;
mod types;

pub mod opponent;
pub mod rules;

pub use action::{Move, MoveError};
pub use history::{History, HistoryError, MoveRecord};
pub use position::Position;
pub use rules::Winner;
pub use session::{GameSession, Turn};
pub use snapshot::{MoveEntry, Snapshot};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
