//! Winner invariants: recorded winners are correct and final.

use super::Invariant;
use crate::GameState;
use crate::rules::check_winner;

/// Invariant: every entry's recorded winner matches its board.
pub struct WinnerConsistentInvariant;

impl Invariant<GameState> for WinnerConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .all(|entry| entry.winner() == check_winner(entry.board()))
    }

    fn description() -> &'static str {
        "Recorded winners match their boards"
    }
}

/// Invariant: no entry follows an entry with a winner.
pub struct WinIsTerminalInvariant;

impl Invariant<GameState> for WinIsTerminalInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        match history.iter().position(|entry| entry.winner().is_some()) {
            Some(first_win) => first_win + 1 == history.len(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move follows a win"
    }
}
