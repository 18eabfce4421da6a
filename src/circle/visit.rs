//! Visit handle passed to circulation visitors.

/// Single-use capability handed to a visitor for the element it landed on.
///
/// The visitor decides what happens to the element: calling [`Visit::remove`]
/// evicts it once the visitor returns. Doing nothing leaves it in place.
#[derive(Debug, Default)]
pub struct Visit {
    removal_requested: bool,
}

impl Visit {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requests removal of the visited element.
    ///
    /// Calling this more than once has no further effect.
    pub fn remove(&mut self) {
        self.removal_requested = true;
    }

    /// Returns true if the visitor asked for the element to be removed.
    pub fn is_removal_requested(&self) -> bool {
        self.removal_requested
    }
}
