//! Error types for the core crate.

use thiserror::Error;

use crate::types::Latch;

/// Errors raised while building or validating core values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A numeric latch code outside `0..=2`.
    #[error("unknown latch: {0}")]
    UnknownLatch(u8),

    /// An edge weight that is negative or not finite.
    #[error("invalid weight {weight}: {reason}")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
        /// Why the weight was rejected.
        reason: &'static str,
    },

    /// A latch that needs a destination was queried without one.
    #[error("{0} query requires a destination")]
    MissingDestination(Latch),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(CoreError::UnknownLatch(9).to_string(), "unknown latch: 9");

        let err = CoreError::InvalidWeight { weight: -1.0, reason: "weight is negative" };
        assert_eq!(err.to_string(), "invalid weight -1: weight is negative");

        let err = CoreError::MissingDestination(Latch::ShortestPath);
        assert_eq!(err.to_string(), "shortest-path query requires a destination");
    }
}
