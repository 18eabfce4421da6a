//! Length invariant: the cached length counts live slots.

use super::Invariant;
use crate::circle::CircularSequence;

/// Invariant: `len()` equals the number of slots still holding a value.
pub struct LenMatchesLiveInvariant;

impl<T> Invariant<CircularSequence<T>> for LenMatchesLiveInvariant {
    fn holds(sequence: &CircularSequence<T>) -> bool {
        let live = sequence
            .slots
            .iter()
            .filter(|slot| slot.value.is_some())
            .count();

        live == sequence.len
    }

    fn description() -> &'static str {
        "Length matches number of live slots"
    }
}
