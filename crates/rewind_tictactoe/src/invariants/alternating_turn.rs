//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Cell, GameState, Player};

/// Invariant: the mark written by entry `i` belongs to X when `i` is odd and
/// to O when `i` is even.
///
/// X always moves first from the empty board.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match entry.played() {
                Some(pos) => entry.board().get(pos) == Cell::Occupied(Player::to_move_at(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
