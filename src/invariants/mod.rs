//! First-class invariants for circles and game outcomes.
//!
//! Invariants are logical properties that must hold after every mutation.
//! They are testable independently and serve as documentation of the
//! structure's guarantees.

use crate::circle::CircularSequence;
use crate::game::GameOutcome;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_live;
pub mod len_matches_live;
pub mod outcome_complete;
pub mod ring_linked;

pub use cursor_live::CursorLiveInvariant;
pub use len_matches_live::LenMatchesLiveInvariant;
pub use outcome_complete::OutcomeCompleteInvariant;
pub use ring_linked::RingLinkedInvariant;

/// All structural circle invariants as a composable set.
pub type CircleInvariants = (
    LenMatchesLiveInvariant,
    RingLinkedInvariant,
    CursorLiveInvariant,
);

/// Checks every circle invariant, logging and debug-asserting on failure.
pub fn assert_invariants<T>(sequence: &CircularSequence<T>) {
    let result = CircleInvariants::check_all(sequence);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = %violation.description, "Circle invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Circle invariants violated: {:?}", result);
}

/// Checks that a finished game accounted for every participant.
pub fn assert_outcome_complete(outcome: &GameOutcome) {
    let holds = OutcomeCompleteInvariant::holds(outcome);
    if !holds {
        warn!(%outcome, "Outcome completeness violated");
    }
    debug_assert!(holds, "{}", OutcomeCompleteInvariant::description());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_fresh_circle() {
        let sequence = CircularSequence::new(vec![1, 2, 3, 4]);
        assert!(CircleInvariants::check_all(&sequence).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_empty_circle() {
        let sequence = CircularSequence::<u8>::new(Vec::new());
        assert!(CircleInvariants::check_all(&sequence).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_removals() {
        let mut sequence = CircularSequence::new(0..10);
        for _ in 0..7 {
            sequence.circulate_and_remove(3).unwrap();
            assert!(CircleInvariants::check_all(&sequence).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut sequence = CircularSequence::new(vec![1, 2, 3]);
        sequence.len += 1;

        let violations = CircleInvariants::check_all(&sequence).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == <LenMatchesLiveInvariant as Invariant<CircularSequence<i32>>>::description())
        );
    }
}
