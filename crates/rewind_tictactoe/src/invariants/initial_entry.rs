//! Initial entry invariant: history always starts from the empty board.

use super::Invariant;
use crate::{GameState, HistoryEntry};

/// Invariant: `history[0]` is the empty board with no move and no winner.
pub struct InitialEntryInvariant;

impl Invariant<GameState> for InitialEntryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&HistoryEntry::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
