//! Move outcomes.
//!
//! Ignored moves are ordinary results, not errors: clicking an occupied cell
//! or playing after the game is decided leaves the state untouched.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Result of asking the game to apply a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was accepted and produced history entry `step`.
    Applied {
        /// Index of the new history entry (also the new current step).
        step: usize,
    },
    /// The move was rejected and the state is unchanged.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw index outside 0-8.
    #[display("Index {} is not a board position", _0)]
    OutOfRange(usize),
}
