//! Cursor invariant: the resume position never points at a removed element.

use super::Invariant;
use crate::circle::CircularSequence;

/// Invariant: a non-empty circle has a cursor on a live slot, an empty one has none.
pub struct CursorLiveInvariant;

impl<T> Invariant<CircularSequence<T>> for CursorLiveInvariant {
    fn holds(sequence: &CircularSequence<T>) -> bool {
        match sequence.cursor {
            Some(slot) => sequence
                .slots
                .get(slot)
                .is_some_and(|slot| slot.value.is_some()),
            None => sequence.len == 0,
        }
    }

    fn description() -> &'static str {
        "Cursor rests on a live element"
    }
}
