//! Backup and restore for graph edges.
//!
//! The graph itself keeps nothing on disk. This module is the hand-off point
//! for whoever persists it: a portable JSON-lines stream of every edge that
//! can be loaded back into a fresh or existing [`Graph`](crate::Graph).
//!
//! # Format
//!
//! - Line 1: metadata (format version, timestamp, edge count)
//! - Line 2+: one edge record each, in insertion order
//! - Last line: end-of-backup marker carrying the statistics
//!
//! Edge ids are preserved, so insertion order and id allocation survive a
//! round trip.
//!
//! # Example
//!
//! ```
//! use oqgraph::{backup, Graph, NodeId};
//!
//! let graph = Graph::new();
//! graph.insert_edge(NodeId::new(1), NodeId::new(2), 1.5)?;
//!
//! let mut buffer = Vec::new();
//! backup::export_full(&graph, &mut buffer)?;
//!
//! let restored = Graph::new();
//! let stats = backup::import(&restored, buffer.as_slice())?;
//! assert_eq!(stats.edge_count, 1);
//! assert_eq!(restored.edges()?, graph.edges()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod export;
mod import;
mod types;

pub use error::{BackupError, BackupResult};
pub use export::{export_described, export_full, BackupWriter};
pub use import::{import, verify, ImportOptions, Importer};
pub use types::{
    BackupFormat, BackupMetadata, BackupRecord, BackupRecordType, BackupStatistics, EdgeRecord,
    RecordData, BACKUP_FORMAT_VERSION,
};
