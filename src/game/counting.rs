//! The counting-out game itself.
//!
//! Rules:
//! - n children stand in a circle, numbered `0..n` clockwise.
//! - Starting with child 0, they count from 1 to k. The k-th child leaves
//!   the circle, and counting restarts with the child right after them.
//! - k may exceed the number of children left, in which case the count
//!   goes round the circle more than once.
//! - The last child standing wins.
//!
//! A game is single-use: construct, play once, discard.

use super::error::{COUNT_TOO_SMALL, GameError, TOO_FEW_CHILDREN, TOO_MANY_CHILDREN};
use super::phases::{ChildId, GameOutcome, GamePhase};
use crate::circle::{CircleError, CircularSequence};
use crate::config::GameConfig;
use crate::invariants::{assert_invariants, assert_outcome_complete};
use tracing::{debug, info, instrument, warn};

/// Circle of children playing the counting game.
#[derive(Debug, Clone)]
pub struct CountingGame {
    circle: CircularSequence<ChildId>,
    children: usize,
    count: i64,
    phase: GamePhase,
}

impl CountingGame {
    /// Creates a game with `children` participants and a count of `count`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if `children < 2` or `count < 1`,
    /// with the children check first, or if the circle cannot be allocated.
    #[instrument]
    pub fn new(children: i64, count: i64) -> Result<Self, GameError> {
        if children < 2 {
            return Err(GameError::InvalidArgument(TOO_FEW_CHILDREN));
        }
        if count < 1 {
            return Err(GameError::InvalidArgument(COUNT_TOO_SMALL));
        }

        let children =
            usize::try_from(children).map_err(|_| GameError::InvalidArgument(TOO_MANY_CHILDREN))?;
        let circle = CircularSequence::try_new(0..children).map_err(|err| {
            warn!(%err, "Circle too large to seat");
            GameError::InvalidArgument(TOO_MANY_CHILDREN)
        })?;

        debug!(children, count, "Seating children");
        Ok(Self {
            circle,
            children,
            count,
            phase: GamePhase::Ready,
        })
    }

    /// Creates a game from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`CountingGame::new`].
    #[instrument(skip(config), fields(children = config.children(), count = config.count()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::new(*config.children(), *config.count())
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the number of children the game started with.
    pub fn children(&self) -> usize {
        self.children
    }

    /// Returns the count each round runs to.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Returns the number of children still in the circle.
    pub fn remaining(&self) -> usize {
        self.circle.len()
    }

    /// Plays the game to completion.
    ///
    /// Each round counts `count` children from where the previous round
    /// stopped and removes the one counted last, until one child is left.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameAlreadyPlayed`] on a second call.
    #[instrument(skip(self), fields(children = self.children, count = self.count))]
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        if self.phase == GamePhase::Consumed {
            warn!("Attempted to replay a finished game");
            return Err(GameError::GameAlreadyPlayed);
        }

        if cfg!(debug_assertions) {
            assert_invariants(&self.circle);
        }

        let mut evicted = Vec::with_capacity(self.children - 1);
        while self.circle.len() > 1 {
            let child = self
                .circle
                .circulate(self.count, |visit, _| visit.remove())?
                .ok_or(CircleError::Empty)?;

            debug!(child, remaining = self.circle.len(), "Child counted out");
            evicted.push(child);
        }

        self.phase = GamePhase::Consumed;
        let outcome = GameOutcome::new(*self.circle.one_and_only()?, evicted);

        // Full O(n) structural checks; release builds skip them.
        if cfg!(debug_assertions) {
            assert_invariants(&self.circle);
            assert_outcome_complete(&outcome);
        }

        info!(survivor = outcome.survivor(), rounds = outcome.rounds(), "Game finished");
        Ok(outcome)
    }
}
