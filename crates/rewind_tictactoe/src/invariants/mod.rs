//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). They are testable independently and are
//! asserted in debug builds after every accepted move.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to six invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);
impl_invariant_set!(I1, I2, I3, I4, I5, I6);

pub mod alternating_turn;
pub mod initial_entry;
pub mod single_cell_step;
pub mod step_in_bounds;
pub mod winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use initial_entry::InitialEntryInvariant;
pub use single_cell_step::SingleCellStepInvariant;
pub use step_in_bounds::StepInBoundsInvariant;
pub use winner::{WinIsTerminalInvariant, WinnerConsistentInvariant};

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialEntryInvariant,
    StepInBoundsInvariant,
    SingleCellStepInvariant,
    AlternatingTurnInvariant,
    WinnerConsistentInvariant,
    WinIsTerminalInvariant,
);
