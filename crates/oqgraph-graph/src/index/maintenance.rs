//! Index maintenance operations.
//!
//! These are the notifications [`EdgeStore`](crate::store::EdgeStore) sends
//! while it mutates, so the adjacency lists always match the edge table.

use oqgraph_core::Edge;

use super::AdjacencyIndex;

/// Index maintenance operations for edges.
pub struct IndexMaintenance;

impl IndexMaintenance {
    /// Add both adjacency entries for an edge.
    ///
    /// Called when an edge is stored.
    pub fn add_edge_indexes(index: &mut AdjacencyIndex, edge: &Edge) {
        index.add_outgoing(edge.from, edge.id);
        index.add_incoming(edge.to, edge.id);
    }

    /// Remove both adjacency entries for an edge.
    ///
    /// Called when an edge is removed.
    pub fn remove_edge_indexes(index: &mut AdjacencyIndex, edge: &Edge) {
        index.remove_outgoing(edge.from, edge.id);
        index.remove_incoming(edge.to, edge.id);
    }

    /// Discard the index and rebuild it from `edges`.
    ///
    /// # Returns
    ///
    /// The number of edges indexed.
    pub fn rebuild<'a>(index: &mut AdjacencyIndex, edges: impl IntoIterator<Item = &'a Edge>) -> usize {
        index.clear();
        let mut indexed = 0;
        for edge in edges {
            Self::add_edge_indexes(index, edge);
            indexed += 1;
        }
        indexed
    }
}
