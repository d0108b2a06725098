//! Error types for backup and restore operations.

use std::io;

use oqgraph_graph::store::GraphError;
use thiserror::Error;

/// Errors that can occur during backup and restore operations.
#[derive(Debug, Error)]
pub enum BackupError {
    /// An I/O error occurred while reading or writing backup data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A serialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A deserialization error occurred.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The backup format is invalid or corrupted.
    #[error("invalid backup format: {0}")]
    InvalidFormat(String),

    /// The backup version is not supported.
    #[error("unsupported backup version: {0}")]
    UnsupportedVersion(u32),

    /// The backup is empty or incomplete.
    #[error("incomplete backup: {0}")]
    Incomplete(String),

    /// The graph rejected the restored data.
    #[error("graph error: {0}")]
    Graph(#[from] crate::Error),
}

impl BackupError {
    /// Create a serialization error from a serde_json error.
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }

    /// Create a deserialization error for the record at `line`.
    pub fn deserialization(line: u64, err: serde_json::Error) -> Self {
        Self::Deserialization(format!("line {line}: {err}"))
    }

    /// Create an invalid format error.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create an incomplete backup error.
    pub fn incomplete(msg: impl Into<String>) -> Self {
        Self::Incomplete(msg.into())
    }
}

impl From<GraphError> for BackupError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err.into())
    }
}

/// A specialized `Result` type for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;
