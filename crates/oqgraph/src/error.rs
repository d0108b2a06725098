//! Error types for the graph facade.
//!
//! This module provides the [`enum@Error`] type returned by every [`Graph`](crate::Graph)
//! operation.

use oqgraph_graph::store::GraphError;
use thiserror::Error;

/// Errors that can occur when using a [`Graph`](crate::Graph).
#[derive(Debug, Error)]
pub enum Error {
    /// A store or traversal error occurred.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// An internal lock was poisoned (a thread panicked while holding it).
    #[error("internal lock poisoned: {0}")]
    LockPoisoned(String),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the caller can reasonably continue after this error.
    ///
    /// Only "no path" is an expected outcome of a well-formed query. Every
    /// other error points at bad input or a broken graph handle.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Graph(err) if err.is_no_path())
    }

    /// The underlying graph error, if any.
    #[must_use]
    pub const fn as_graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<oqgraph_core::CoreError> for Error {
    fn from(err: oqgraph_core::CoreError) -> Self {
        Self::Graph(err.into())
    }
}

/// A specialized `Result` type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use oqgraph_core::{CoreError, Latch, NodeId};

    use super::*;

    #[test]
    fn only_no_path_is_recoverable() {
        let no_path: Error =
            GraphError::NoPathFound { origin: NodeId::new(1), destination: NodeId::new(2) }.into();
        assert!(no_path.is_recoverable());

        let missing: Error = CoreError::MissingDestination(Latch::ShortestPath).into();
        assert!(!missing.is_recoverable());
        assert!(!Error::LockPoisoned("edge store".to_owned()).is_recoverable());
        assert!(!Error::Config("bad".to_owned()).is_recoverable());
    }

    #[test]
    fn graph_errors_display_transparently() {
        let err: Error = GraphError::UnknownLatch(7).into();
        assert_eq!(err.to_string(), "unknown latch: 7");
        assert_eq!(err.as_graph_error(), Some(&GraphError::UnknownLatch(7)));
    }
}
