//! Error types for graph storage and traversal.

use oqgraph_core::{CoreError, EdgeId, Latch, NodeId};
use thiserror::Error;

/// Errors that can occur in graph storage and traversal operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge weight was negative or not finite.
    #[error("invalid edge weight {weight}: {reason}")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
        /// Why the weight was rejected.
        reason: &'static str,
    },

    /// A numeric latch code outside the known query modes.
    #[error("unknown latch: {0}")]
    UnknownLatch(u8),

    /// A latch that needs a destination was queried without one.
    #[error("{0} query requires a destination")]
    MissingDestination(Latch),

    /// No route connects the two nodes.
    #[error("no path from {origin} to {destination}")]
    NoPathFound {
        /// Node the search started from.
        origin: NodeId,
        /// Node the search was looking for.
        destination: NodeId,
    },

    /// An edge was not found.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// An edge with the given ID already exists.
    #[error("edge already exists: {0}")]
    EdgeAlreadyExists(EdgeId),

    /// A traversal settled more nodes than its configured limit.
    #[error("traversal visited more than {limit} nodes")]
    VisitLimitExceeded {
        /// The configured maximum.
        limit: usize,
    },

    /// Every edge ID has been handed out.
    #[error("edge id space exhausted")]
    IdsExhausted,

    /// The shortest path weighs more than an `f64` can hold.
    #[error("path weight from {origin} to {destination} overflows")]
    WeightOverflow {
        /// Node the search started from.
        origin: NodeId,
        /// Node the search was looking for.
        destination: NodeId,
    },

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GraphError {
    /// Returns `true` if this is the "no route" outcome.
    #[must_use]
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }

    /// Returns `true` for errors caused by a bad call rather than graph contents.
    ///
    /// Retrying such a call unchanged always fails the same way.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWeight { .. } | Self::UnknownLatch(_) | Self::MissingDestination(_)
        )
    }
}

impl From<CoreError> for GraphError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownLatch(code) => Self::UnknownLatch(code),
            CoreError::InvalidWeight { weight, reason } => Self::InvalidWeight { weight, reason },
            CoreError::MissingDestination(latch) => Self::MissingDestination(latch),
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::NoPathFound { origin: NodeId::new(1), destination: NodeId::new(9) };
        assert_eq!(err.to_string(), "no path from 1 to 9");

        let err = GraphError::EdgeNotFound(EdgeId::new(123));
        assert!(err.to_string().contains("123"));

        let err = GraphError::WeightOverflow { origin: NodeId::new(1), destination: NodeId::new(3) };
        assert_eq!(err.to_string(), "path weight from 1 to 3 overflows");
        assert!(!err.is_programming_error());
        assert!(!GraphError::IdsExhausted.is_no_path());
    }

    #[test]
    fn from_core_error() {
        let graph_err: GraphError = CoreError::UnknownLatch(4).into();
        assert_eq!(graph_err, GraphError::UnknownLatch(4));

        let graph_err: GraphError =
            CoreError::InvalidWeight { weight: -2.0, reason: "weight is negative" }.into();
        assert!(matches!(graph_err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn classification() {
        let no_path = GraphError::NoPathFound { origin: NodeId::new(1), destination: NodeId::new(2) };
        assert!(no_path.is_no_path());
        assert!(!no_path.is_programming_error());

        assert!(GraphError::UnknownLatch(3).is_programming_error());
        assert!(GraphError::MissingDestination(Latch::ShortestPath).is_programming_error());
        assert!(!GraphError::VisitLimitExceeded { limit: 10 }.is_programming_error());
    }
}
