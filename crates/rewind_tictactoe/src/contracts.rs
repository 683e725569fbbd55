//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} apply_move {Q}`. The precondition decides whether a click counts at
//! all; the postcondition is checked in debug builds after every accepted move.

use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::{GameState, IgnoredMove, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why an action can be refused.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The displayed board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that the entry at the current step records no winner.
    pub fn check(game: &GameState) -> Result<(), IgnoredMove> {
        match game.current_entry().winner() {
            Some(_) => Err(IgnoredMove::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The target cell is empty on the displayed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that `pos` is empty at the current step.
    pub fn check(game: &GameState, pos: Position) -> Result<(), IgnoredMove> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoredMove::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is not over and the
/// cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game), fields(step = game.current_step()))]
    pub fn check(game: &GameState, pos: Position) -> Result<(), IgnoredMove> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(game, pos)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No winner on the displayed board
/// - Target cell is empty
///
/// Postconditions:
/// - Future branch discarded: history is exactly one entry past the old step
/// - The new entry is current
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Rejection = IgnoredMove;

    fn pre(game: &GameState, pos: &Position) -> Result<(), IgnoredMove> {
        LegalMove::check(game, *pos)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if after.history().len() != before.current_step() + 2 {
            violations.push(InvariantViolation::new(
                "History extends exactly one entry past the previous step",
            ));
        }

        if after.current_step() + 1 != after.history().len() {
            violations.push(InvariantViolation::new("The new entry is the current step"));
        }

        if let Err(mut found) = HistoryInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
