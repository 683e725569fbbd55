//! Rewind tic-tac-toe - a time-travelling tic-tac-toe state machine.
//!
//! The crate owns the game rules and nothing else: no rendering, no I/O.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a board snapshot
//! - **GameState**: the history of board snapshots, the step pointer into it,
//!   and the display-order preference
//! - **View**: labels, status text and highlights derived from the state for
//!   whatever front end draws the game
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position, Status, Player};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center);
//! assert_eq!(game.current_status(), Status::InProgress(Player::O));
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.current_status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod history;
mod position;
mod status;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

#[cfg(kani)]
mod verification;

pub use action::{IgnoredMove, MoveOutcome};
pub use contracts::LegalMove;
pub use error::{GameError, GameErrorKind};
pub use game::GameState;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{Win, WinningLine};
pub use status::Status;
pub use types::{Board, Cell, Player};
pub use view::{GameView, MoveListItem};
