//! Ring invariant: live slots form one closed, doubly-linked loop.

use super::Invariant;
use crate::circle::CircularSequence;

/// Invariant: following `next` from the head visits exactly `len` live slots
/// and returns to the head, and every `prev` mirrors its `next`.
pub struct RingLinkedInvariant;

impl<T> Invariant<CircularSequence<T>> for RingLinkedInvariant {
    fn holds(sequence: &CircularSequence<T>) -> bool {
        let Some(head) = sequence.head else {
            return sequence.len == 0;
        };

        let mut at = head;
        for _ in 0..sequence.len {
            let Some(slot) = sequence.slots.get(at) else {
                return false;
            };
            if slot.value.is_none() {
                return false;
            }
            let mirrored = sequence
                .slots
                .get(slot.next)
                .is_some_and(|next| next.prev == at);
            if !mirrored {
                return false;
            }
            at = slot.next;
        }

        at == head
    }

    fn description() -> &'static str {
        "Live slots form a closed doubly-linked ring"
    }
}
