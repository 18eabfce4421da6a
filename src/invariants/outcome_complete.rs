//! Completeness invariant: every participant is either evicted or the survivor.

use super::Invariant;
use crate::game::GameOutcome;

/// Invariant: evicted ids plus the survivor are exactly `0..n`, each once.
pub struct OutcomeCompleteInvariant;

impl Invariant<GameOutcome> for OutcomeCompleteInvariant {
    fn holds(outcome: &GameOutcome) -> bool {
        let mut ids: Vec<_> = outcome.evicted_in_order().to_vec();
        ids.push(outcome.survivor());
        ids.sort_unstable();

        ids.into_iter().enumerate().all(|(expected, id)| id == expected)
    }

    fn description() -> &'static str {
        "Evicted children and survivor cover every id exactly once"
    }
}
