use thiserror::Error as ThisError;

///
/// UnsupportedError
///
/// Invocation rejection for operations whose natural output is keyed by
/// something other than sequential position. Raised before any work is
/// performed; the receiver is never observed in a partially mutated state.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("`{operation}` is not supported on DenseList because it would produce non-sequential keys")]
pub struct UnsupportedError {
    /// Name of the rejected operation.
    pub operation: &'static str,
}

impl UnsupportedError {
    /// Construct a rejection for the named operation.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

///
/// TESTS
///
