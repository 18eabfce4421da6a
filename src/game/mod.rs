//! Counting-out elimination game.

mod counting;
mod error;
mod phases;

pub use counting::CountingGame;
pub use error::GameError;
pub use phases::{ChildId, GameOutcome, GamePhase};

pub(crate) use error::{COUNT_TOO_SMALL, TOO_FEW_CHILDREN};
