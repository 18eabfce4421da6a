//! Error types for circular sequence operations.

/// Error that can occur when stepping through or inspecting a circle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CircleError {
    /// The step count passed to a circulation was below 1.
    #[display("At least 1 element to circulate to expected, got {}", _0)]
    InvalidStepCount(i64),

    /// A singleton was expected but the circle held this many elements.
    #[display("Expecting exactly one element, found {}", _0)]
    ExpectedSingleton(usize),

    /// An element was required but the circle is empty.
    #[display("No elements left in the circle")]
    Empty,

    /// Room for this many elements could not be reserved.
    #[display("Cannot allocate a circle of {} elements", _0)]
    CapacityExceeded(usize),

    /// The ring links no longer describe the live elements.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for CircleError {}
