//! Step pointer invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the current step indexes an existing history entry.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}
