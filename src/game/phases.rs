//! Game phase and outcome types.

use serde::{Deserialize, Serialize};

/// Participant identifier. Children are numbered `0..n` around the circle.
pub type ChildId = usize;

/// Lifecycle phase of a [`CountingGame`](super::CountingGame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GamePhase {
    /// Constructed and not yet played.
    Ready,
    /// Played to completion; cannot be played again.
    Consumed,
}

/// Outcome of a finished game.
///
/// The survivor is ALWAYS present: an outcome only exists once the circle
/// is down to one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    survivor: ChildId,
    evicted_in_order: Vec<ChildId>,
}

impl GameOutcome {
    pub(crate) fn new(survivor: ChildId, evicted_in_order: Vec<ChildId>) -> Self {
        Self {
            survivor,
            evicted_in_order,
        }
    }

    /// Returns the last child standing.
    pub fn survivor(&self) -> ChildId {
        self.survivor
    }

    /// Returns the evicted children, first out first.
    pub fn evicted_in_order(&self) -> &[ChildId] {
        &self.evicted_in_order
    }

    /// Returns the number of elimination rounds played.
    pub fn rounds(&self) -> usize {
        self.evicted_in_order.len()
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "survivor {}, evicted {:?}",
            self.survivor, self.evicted_in_order
        )
    }
}
