//! Derived game status.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Status of the displayed board.
///
/// Never stored: always recomputed from the entry at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game is ongoing; the player is next to move.
    #[display("Next player: {}", _0)]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Board is full with no winner.
    #[display("It's a tie!")]
    Tied,
}

impl Status {
    /// Returns true if no further moves are accepted from this board.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(*player),
            _ => None,
        }
    }
}
