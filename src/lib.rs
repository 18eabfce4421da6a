//! Counting circle library - the counting-out (Josephus) elimination game
//!
//! n children stand in a circle and are counted out one at a time, every
//! k-th child leaving, until one is left standing.
//!
//! # Architecture
//!
//! - **Circle**: ordered elements with a resumable counting cursor
//! - **Game**: single-use elimination run built on the circle
//! - **Invariants**: structural guarantees, checked after every game
//! - **Config**: TOML-backed game settings
//!
//! # Example
//!
//! ```
//! use counting_circle::CountingGame;
//!
//! # fn example() -> Result<(), counting_circle::GameError> {
//! let mut game = CountingGame::new(3, 2)?;
//! let outcome = game.play()?;
//!
//! assert_eq!(outcome.survivor(), 2);
//! assert_eq!(outcome.evicted_in_order(), &[1, 0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod circle;
mod config;
mod game;
mod invariants;

// Crate-level exports - Circle
pub use circle::{CircleError, CircularSequence, Iter, Visit};

// Crate-level exports - Game
pub use game::{ChildId, CountingGame, GameError, GameOutcome, GamePhase};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Invariants
pub use invariants::{
    CircleInvariants, CursorLiveInvariant, Invariant, InvariantSet, InvariantViolation,
    LenMatchesLiveInvariant, OutcomeCompleteInvariant, RingLinkedInvariant,
};
