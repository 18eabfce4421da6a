//! Resumable circular traversal.

mod error;
mod sequence;
mod visit;

pub use error::CircleError;
pub use sequence::{CircularSequence, Iter};
pub use visit::Visit;

