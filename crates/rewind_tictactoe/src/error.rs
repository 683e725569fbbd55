//! Error types for the game state machine.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A history step outside `0..len` was requested.
    #[display("step {} is out of range for a history of {} entries", step, len)]
    InvalidStep {
        /// The requested step.
        step: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },

    /// A raw board index outside `0..9`.
    #[display("position {} is out of bounds (must be 0-8)", _0)]
    PositionOutOfBounds(usize),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// The error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
