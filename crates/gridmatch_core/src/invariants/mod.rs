//! First-class invariants for game entities.
//!
//! Invariants are logical properties that must hold for every game the
//! registry stores. They are asserted after each transition in debug builds
//! and checked in full whenever a serialized game is restored.

mod alternating;
mod history;
mod outcome;
mod players;
mod turn;

pub use alternating::AlternatingTurnInvariant;
pub use history::HistoryConsistentInvariant;
pub use outcome::OutcomeStatusInvariant;
pub use players::SeatingInvariant;
pub use turn::TurnStatusInvariant;

use crate::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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
/// Implemented for tuples of [`Invariant`]s.
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

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Every invariant a stored [`Game`] satisfies.
pub type GameInvariants = (
    SeatingInvariant,
    TurnStatusInvariant,
    AlternatingTurnInvariant,
    OutcomeStatusInvariant,
    HistoryConsistentInvariant,
);

/// Checks a game against [`GameInvariants`].
pub fn check_game(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(game)
}
