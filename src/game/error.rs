//! Error types for the counting game.

use crate::circle::CircleError;

/// Message for a circle with too few children.
pub(crate) const TOO_FEW_CHILDREN: &str = "at least 2 participants expected";

/// Message for a circle too large to allocate.
pub(crate) const TOO_MANY_CHILDREN: &str = "participant count cannot be allocated";

/// Message for a non-positive count.
pub(crate) const COUNT_TOO_SMALL: &str = "at least 1 step count expected";

/// Error that can occur when setting up or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// A constructor argument is out of range.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(&'static str),

    /// The game was already played to completion.
    #[display("Circle has been broken, game instance cannot be reused")]
    GameAlreadyPlayed,

    /// The underlying circle rejected an operation.
    #[display("{}", _0)]
    #[from]
    Circle(CircleError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Circle(err) => Some(err),
            GameError::InvalidArgument(_) | GameError::GameAlreadyPlayed => None,
        }
    }
}
