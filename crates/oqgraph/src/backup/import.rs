//! Backup import (restore).

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

use oqgraph_core::{validate_weight, Edge};
use oqgraph_graph::store::GraphError;
use tracing::{info, warn};

use super::error::{BackupError, BackupResult};
use super::types::{
    BackupMetadata, BackupRecord, BackupStatistics, RecordData, BACKUP_FORMAT_VERSION,
};
use crate::Graph;

/// Options for controlling the import process.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Skip edges whose id already exists in the target graph instead of
    /// failing the whole import.
    pub skip_duplicates: bool,

    /// Validate the backup without touching the graph.
    pub dry_run: bool,
}

impl ImportOptions {
    /// Create options for a dry run.
    pub fn dry_run() -> Self {
        Self { dry_run: true, ..Default::default() }
    }

    /// Create options that skip edges already present.
    pub fn skip_duplicates() -> Self {
        Self { skip_duplicates: true, ..Default::default() }
    }
}

/// Reads and restores backup records.
///
/// The whole backup is read and validated before the graph is touched, so a
/// malformed or truncated backup leaves the target graph unchanged.
pub struct Importer<R: Read> {
    reader: BufReader<R>,
    metadata: Option<BackupMetadata>,
    options: ImportOptions,
    statistics: BackupStatistics,
    line_number: u64,
}

impl<R: Read> Importer<R> {
    /// Create a new importer with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ImportOptions::default())
    }

    /// Create a new importer with custom options.
    pub fn with_options(reader: R, options: ImportOptions) -> Self {
        Self {
            reader: BufReader::new(reader),
            metadata: None,
            options,
            statistics: BackupStatistics::default(),
            line_number: 0,
        }
    }

    /// Read and validate the backup metadata.
    ///
    /// This must be called before reading edges; [`Self::import_all`] calls
    /// it itself.
    pub fn read_metadata(&mut self) -> BackupResult<&BackupMetadata> {
        if self.metadata.is_none() {
            let meta = self.read_header()?;
            self.metadata = Some(meta);
        }
        self.metadata.as_ref().ok_or_else(|| BackupError::incomplete("missing metadata"))
    }

    fn read_header(&mut self) -> BackupResult<BackupMetadata> {
        let record =
            self.read_record()?.ok_or_else(|| BackupError::incomplete("empty backup"))?;

        match record.data {
            RecordData::Metadata(meta) => {
                if meta.version > BACKUP_FORMAT_VERSION {
                    return Err(BackupError::UnsupportedVersion(meta.version));
                }
                self.statistics.add_marker();
                Ok(meta)
            }
            _ => Err(BackupError::invalid_format(format!(
                "line {}: first record must be metadata",
                self.line_number
            ))),
        }
    }

    /// Get the backup metadata (after reading it).
    pub fn metadata(&self) -> Option<&BackupMetadata> {
        self.metadata.as_ref()
    }

    /// Get the current import statistics.
    pub fn statistics(&self) -> &BackupStatistics {
        &self.statistics
    }

    /// Read the next non-empty record, or `None` at end of input.
    pub fn read_record(&mut self) -> BackupResult<Option<BackupRecord>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.statistics.add_size(line.len() as u64);
            if !line.trim().is_empty() {
                break;
            }
        }

        let record: BackupRecord = serde_json::from_str(line.trim())
            .map_err(|err| BackupError::deserialization(self.line_number, err))?;

        if !record.is_consistent() {
            return Err(BackupError::invalid_format(format!(
                "line {}: payload does not match record type {:?}",
                self.line_number, record.record_type
            )));
        }

        Ok(Some(record))
    }

    /// Import all records into `graph`.
    ///
    /// Edges keep their ids, so their relative order survives the round trip,
    /// and ids handed out afterwards continue past the largest restored id.
    ///
    /// # Errors
    ///
    /// - [`BackupError::Incomplete`] for an empty backup, a missing end marker,
    ///   or an end marker whose edge count disagrees with the records read
    /// - [`BackupError::InvalidFormat`] for misplaced records, repeated edge
    ///   ids or invalid weights
    /// - [`BackupError::Graph`] if an edge id already exists in `graph` and
    ///   duplicates are not skipped
    pub fn import_all(mut self, graph: &Graph) -> BackupResult<BackupStatistics> {
        let edges = self.read_edges()?;

        if self.options.dry_run {
            return Ok(self.statistics);
        }

        let mut store = graph.write()?;

        if !self.options.skip_duplicates {
            if let Some(existing) = edges.iter().find(|edge| store.contains(edge.id)) {
                return Err(GraphError::EdgeAlreadyExists(existing.id).into());
            }
        }

        let mut restored = 0u64;
        let mut skipped = 0u64;
        for edge in edges {
            if store.contains(edge.id) {
                skipped += 1;
                continue;
            }
            store.insert_with_id(edge)?;
            restored += 1;
        }
        drop(store);

        if skipped > 0 {
            warn!(skipped, "skipped edges already present in graph");
        }
        info!(restored, "graph backup imported");
        Ok(self.statistics)
    }

    /// Read and validate every record after the header.
    fn read_edges(&mut self) -> BackupResult<Vec<Edge>> {
        self.read_metadata()?;

        let mut edges = Vec::new();
        let mut seen = HashSet::new();

        while let Some(record) = self.read_record()? {
            match record.data {
                RecordData::Edge(edge_record) => {
                    validate_weight(edge_record.weight).map_err(|err| {
                        BackupError::invalid_format(format!("line {}: {err}", self.line_number))
                    })?;
                    if !seen.insert(edge_record.id) {
                        return Err(BackupError::invalid_format(format!(
                            "line {}: edge {} appears twice",
                            self.line_number, edge_record.id
                        )));
                    }
                    edges.push(edge_record.to_edge());
                    self.statistics.add_edge();
                }
                RecordData::EndOfBackup(expected) => {
                    self.statistics.add_marker();
                    if expected.edge_count != self.statistics.edge_count {
                        return Err(BackupError::incomplete(format!(
                            "end marker counts {} edges, read {}",
                            expected.edge_count, self.statistics.edge_count
                        )));
                    }
                    return Ok(edges);
                }
                RecordData::Metadata(_) => {
                    return Err(BackupError::invalid_format(format!(
                        "line {}: metadata after header",
                        self.line_number
                    )));
                }
            }
        }

        Err(BackupError::incomplete("missing end-of-backup marker"))
    }
}

/// Import a backup into `graph`.
///
/// # Errors
///
/// See [`Importer::import_all`].
pub fn import<R: Read>(graph: &Graph, reader: R) -> BackupResult<BackupStatistics> {
    Importer::new(reader).import_all(graph)
}

/// Verify a backup without importing it.
///
/// Returns statistics about what would be imported.
///
/// # Errors
///
/// Fails exactly where [`import`] would fail before touching the graph.
pub fn verify<R: Read>(reader: R) -> BackupResult<BackupStatistics> {
    Importer::with_options(reader, ImportOptions::dry_run()).import_all(&Graph::new())
}
