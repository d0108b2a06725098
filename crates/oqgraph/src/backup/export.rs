//! Backup export.

use std::io::Write;

use oqgraph_core::Edge;
use tracing::info;

use super::error::{BackupError, BackupResult};
use super::types::{BackupMetadata, BackupRecord, BackupStatistics, EdgeRecord};
use crate::Graph;

/// Writes backup records to an output stream, one JSON object per line.
pub struct BackupWriter<W: Write> {
    writer: W,
    statistics: BackupStatistics,
    records_written: u64,
}

impl<W: Write> BackupWriter<W> {
    /// Create a new backup writer.
    pub fn new(writer: W) -> Self {
        Self { writer, statistics: BackupStatistics::default(), records_written: 0 }
    }

    /// Write the backup metadata header.
    ///
    /// This must be the first record written.
    pub fn write_metadata(&mut self, metadata: &BackupMetadata) -> BackupResult<()> {
        self.write_record(&BackupRecord::metadata(metadata.clone()))?;
        self.statistics.add_marker();
        Ok(())
    }

    /// Write an edge record.
    pub fn write_edge(&mut self, edge: &Edge) -> BackupResult<()> {
        self.write_record(&BackupRecord::edge(EdgeRecord::from_edge(edge)))?;
        self.statistics.add_edge();
        Ok(())
    }

    /// Write the end-of-backup marker and flush.
    pub fn finish(mut self) -> BackupResult<BackupStatistics> {
        self.statistics.add_marker();
        let record = BackupRecord::end_of_backup(self.statistics.clone());
        self.write_record(&record)?;
        self.writer.flush()?;
        Ok(self.statistics)
    }

    /// Get the current statistics.
    pub fn statistics(&self) -> &BackupStatistics {
        &self.statistics
    }

    /// Get the number of records written.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    fn write_record(&mut self, record: &BackupRecord) -> BackupResult<()> {
        let json = serde_json::to_string(record).map_err(BackupError::serialization)?;
        self.statistics.add_size(json.len() as u64 + 1); // +1 for newline
        writeln!(self.writer, "{json}")?;
        self.records_written += 1;
        Ok(())
    }
}

/// Export every edge of `graph`.
///
/// The export holds the graph's read lock throughout, so it is a consistent
/// snapshot: writers wait until it finishes.
///
/// # Errors
///
/// Fails on I/O or serialization errors, or if the graph lock is poisoned.
pub fn export_full<W: Write>(graph: &Graph, writer: W) -> BackupResult<BackupStatistics> {
    export_with_metadata(graph, writer, BackupMetadata::new)
}

/// Export every edge of `graph`, tagging the header with `description`.
///
/// # Errors
///
/// Fails on I/O or serialization errors, or if the graph lock is poisoned.
pub fn export_described<W: Write>(
    graph: &Graph,
    writer: W,
    description: &str,
) -> BackupResult<BackupStatistics> {
    export_with_metadata(graph, writer, |edge_count| {
        BackupMetadata::new(edge_count).with_description(description)
    })
}

fn export_with_metadata<W, F>(graph: &Graph, writer: W, metadata: F) -> BackupResult<BackupStatistics>
where
    W: Write,
    F: FnOnce(u64) -> BackupMetadata,
{
    let store = graph.read()?;

    let mut backup_writer = BackupWriter::new(writer);
    backup_writer.write_metadata(&metadata(store.len() as u64))?;

    for edge in store.iter() {
        backup_writer.write_edge(edge)?;
    }

    let statistics = backup_writer.finish()?;
    info!(
        edges = statistics.edge_count,
        bytes = statistics.uncompressed_size,
        "graph backup exported"
    );
    Ok(statistics)
}

#[cfg(test)]
mod tests {
    use oqgraph_core::NodeId;

    use super::*;

    #[test]
    fn writes_header_edges_and_marker() {
        let graph = Graph::new();
        graph.insert_edge(NodeId::new(1), NodeId::new(2), 1.0).expect("insert");
        graph.insert_edge(NodeId::new(2), NodeId::new(3), 2.0).expect("insert");

        let mut buffer = Vec::new();
        let stats = export_full(&graph, &mut buffer).expect("export");

        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(r#"{"type":"metadata""#));
        assert!(lines[1].starts_with(r#"{"type":"edge""#));
        assert!(lines[3].starts_with(r#"{"type":"end_of_backup""#));

        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.uncompressed_size, text.len() as u64);
    }

    #[test]
    fn writer_counts_records() {
        let mut buffer = Vec::new();
        let mut writer = BackupWriter::new(&mut buffer);
        writer.write_metadata(&BackupMetadata::new(0)).expect("metadata");
        assert_eq!(writer.records_written(), 1);
        assert_eq!(writer.statistics().edge_count, 0);
    }
}
