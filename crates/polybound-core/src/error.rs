//! Error types for polybound
//!
//! Contract violations never surface here, they go through [`check!`](crate::check!).
//! This type covers the fallible `try_*` entry points only: the capacity of
//! an inline vector, and the output length of a fixed-size convolution target.

use thiserror::Error;

/// Recoverable error for fallible container operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fixed-capacity container cannot hold the requested number of elements
    #[error("Capacity exceeded: capacity is {capacity}, requested {requested}")]
    CapacityExceeded { capacity: usize, requested: usize },

    /// A sequence has a different length than the operation requires
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a container that is too small
    pub fn capacity_exceeded(capacity: usize, requested: usize) -> Self {
        Self::CapacityExceeded {
            capacity,
            requested,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }
}
