//! Types for backup and restore operations.

use oqgraph_core::{Edge, EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// The current backup format version.
pub const BACKUP_FORMAT_VERSION: u32 = 1;

/// Backup format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFormat {
    /// JSON-lines format (one JSON object per line).
    #[default]
    JsonLines,
}

/// Metadata about a backup.
///
/// This is always the first record of a backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupMetadata {
    /// The backup format version.
    pub version: u32,

    /// The backup format type.
    pub format: BackupFormat,

    /// The timestamp when the backup was created (Unix epoch seconds).
    pub created_at: u64,

    /// Number of edges the graph held when the backup was taken.
    pub edge_count: u64,

    /// Optional user-provided description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BackupMetadata {
    /// Create metadata for a backup of `edge_count` edges.
    pub fn new(edge_count: u64) -> Self {
        Self {
            version: BACKUP_FORMAT_VERSION,
            format: BackupFormat::default(),
            created_at: current_timestamp(),
            edge_count,
            description: None,
        }
    }

    /// Set the description for this backup.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Statistics about backup contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStatistics {
    /// Number of edges in the backup.
    pub edge_count: u64,

    /// Total number of records written or read, markers included.
    pub total_records: u64,

    /// Size in bytes of the backup data.
    pub uncompressed_size: u64,
}

impl BackupStatistics {
    /// Count one edge record.
    pub fn add_edge(&mut self) {
        self.edge_count += 1;
        self.total_records += 1;
    }

    /// Count one non-edge record.
    pub fn add_marker(&mut self) {
        self.total_records += 1;
    }

    /// Add to the data size.
    pub fn add_size(&mut self, size: u64) {
        self.uncompressed_size += size;
    }
}

/// The type of a backup record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupRecordType {
    /// Backup metadata (always first record).
    Metadata,
    /// An edge record.
    Edge,
    /// End-of-backup marker.
    EndOfBackup,
}

/// A single line of a backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// The type of this record.
    #[serde(rename = "type")]
    pub record_type: BackupRecordType,

    /// The record data.
    pub data: RecordData,
}

impl BackupRecord {
    /// Create a metadata record.
    pub fn metadata(meta: BackupMetadata) -> Self {
        Self { record_type: BackupRecordType::Metadata, data: RecordData::Metadata(meta) }
    }

    /// Create an edge record.
    pub fn edge(edge: EdgeRecord) -> Self {
        Self { record_type: BackupRecordType::Edge, data: RecordData::Edge(edge) }
    }

    /// Create an end-of-backup marker.
    pub fn end_of_backup(stats: BackupStatistics) -> Self {
        Self { record_type: BackupRecordType::EndOfBackup, data: RecordData::EndOfBackup(stats) }
    }

    /// Whether `data` holds the payload `record_type` announces.
    pub fn is_consistent(&self) -> bool {
        matches!(
            (self.record_type, &self.data),
            (BackupRecordType::Metadata, RecordData::Metadata(_))
                | (BackupRecordType::Edge, RecordData::Edge(_))
                | (BackupRecordType::EndOfBackup, RecordData::EndOfBackup(_))
        )
    }
}

/// The data payload of a backup record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordData {
    /// Backup metadata.
    Metadata(BackupMetadata),
    /// An edge record.
    Edge(EdgeRecord),
    /// End-of-backup statistics.
    EndOfBackup(BackupStatistics),
}

/// A serialized edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// The edge ID.
    pub id: u64,
    /// The source node ID.
    pub from: u64,
    /// The target node ID.
    pub to: u64,
    /// The edge weight.
    pub weight: f64,
}

impl EdgeRecord {
    /// Create an edge record from a stored edge.
    pub fn from_edge(edge: &Edge) -> Self {
        Self {
            id: edge.id.as_u64(),
            from: edge.from.as_u64(),
            to: edge.to.as_u64(),
            weight: edge.weight,
        }
    }

    /// Convert back to an edge.
    pub fn to_edge(&self) -> Edge {
        Edge::new(EdgeId::new(self.id), NodeId::new(self.from), NodeId::new(self.to), self.weight)
    }
}

/// Get the current Unix timestamp in seconds.
fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_record_line_shape() {
        let edge = Edge::new(EdgeId::new(3), NodeId::new(1), NodeId::new(2), 0.5);
        let record = BackupRecord::edge(EdgeRecord::from_edge(&edge));
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"type":"edge","data":{"id":3,"from":1,"to":2,"weight":0.5}}"#);

        let parsed: BackupRecord = serde_json::from_str(&json).expect("deserialize");
        assert!(parsed.is_consistent());
        match parsed.data {
            RecordData::Edge(edge_record) => assert_eq!(edge_record.to_edge(), edge),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn untagged_payloads_resolve_by_shape() {
        let line = serde_json::to_string(&BackupRecord::metadata(BackupMetadata::new(4)))
            .expect("serialize");
        let meta: BackupRecord = serde_json::from_str(&line).expect("metadata");
        assert!(matches!(meta.data, RecordData::Metadata(ref m) if m.edge_count == 4));

        let end: BackupRecord = serde_json::from_str(
            r#"{"type":"end_of_backup","data":{"edge_count":1,"total_records":3,"uncompressed_size":90}}"#,
        )
        .expect("end marker");
        assert!(end.is_consistent());
    }

    #[test]
    fn mismatched_type_is_inconsistent() {
        let record = BackupRecord {
            record_type: BackupRecordType::Metadata,
            data: RecordData::EndOfBackup(BackupStatistics::default()),
        };
        assert!(!record.is_consistent());
    }

    #[test]
    fn metadata_defaults() {
        let meta = BackupMetadata::new(0).with_description("nightly");
        assert_eq!(meta.version, BACKUP_FORMAT_VERSION);
        assert_eq!(meta.format, BackupFormat::JsonLines);
        assert_eq!(meta.description.as_deref(), Some("nightly"));
    }
}
