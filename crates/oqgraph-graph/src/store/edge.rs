//! Edge storage operations.
//!
//! This module provides insert, remove and scan operations for edges.

use std::collections::BTreeMap;

use oqgraph_core::{validate_weight, Direction, Edge, EdgeId, NodeId};
use tracing::debug;

use super::error::{GraphError, GraphResult};
use super::IdGenerator;
use crate::index::{AdjacencyIndex, IndexMaintenance};

/// Edge storage.
///
/// `EdgeStore` records every edge keyed by [`EdgeId`] and owns the
/// [`AdjacencyIndex`] that mirrors it. Every mutation updates the index before
/// returning, so a caller holding `&EdgeStore` never sees the two disagree.
///
/// # Ordering
///
/// Edge ids are allocated in increasing order, so both the edge table and the
/// per-node adjacency lists iterate in insertion order.
///
/// # Multigraph
///
/// Any number of edges may connect the same ordered pair of nodes; each is a
/// separate record with its own id and weight.
#[derive(Debug, Default)]
pub struct EdgeStore {
    /// Edge data keyed by edge ID.
    edges: BTreeMap<EdgeId, Edge>,
    /// Outgoing and incoming edge lists per node.
    adjacency: AdjacencyIndex,
    /// Source of new edge IDs.
    id_gen: IdGenerator,
}

impl EdgeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new edge from `from` to `to`.
    ///
    /// # Returns
    ///
    /// The ID assigned to the edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] if `weight` is negative or not finite.
    /// Returns [`GraphError::IdsExhausted`] once no unused ID is left, which
    /// happens after an edge with ID `u64::MAX` has been restored.
    pub fn insert(&mut self, from: NodeId, to: NodeId, weight: f64) -> GraphResult<EdgeId> {
        let weight = validate_weight(weight)?;
        let id = self.id_gen.next_edge_id().ok_or(GraphError::IdsExhausted)?;
        self.store_edge(Edge::new(id, from, to, weight))?;
        debug!(edge_id = %id, %from, %to, weight, "inserted edge");
        Ok(id)
    }

    /// Insert an edge that already carries an ID.
    ///
    /// Used when restoring edges from a backup. Later [`Self::insert`] calls
    /// allocate IDs above every ID loaded this way.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeAlreadyExists`] if an edge with this ID exists.
    /// Returns [`GraphError::InvalidWeight`] if the edge weight is invalid.
    pub fn insert_with_id(&mut self, edge: Edge) -> GraphResult<()> {
        if self.edges.contains_key(&edge.id) {
            return Err(GraphError::EdgeAlreadyExists(edge.id));
        }
        validate_weight(edge.weight)?;

        self.id_gen.observe(edge.id);
        debug!(edge_id = %edge.id, from = %edge.from, to = %edge.to, "restored edge");
        self.store_edge(edge)
    }

    /// Store an edge and its indexes. Never replaces an existing record.
    fn store_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if self.edges.contains_key(&edge.id) {
            return Err(GraphError::EdgeAlreadyExists(edge.id));
        }
        IndexMaintenance::add_edge_indexes(&mut self.adjacency, &edge);
        self.edges.insert(edge.id, edge);
        Ok(())
    }

    /// Remove an edge by ID.
    ///
    /// # Returns
    ///
    /// The removed edge, or `None` if it didn't exist.
    pub fn remove(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.remove(&id)?;
        IndexMaintenance::remove_edge_indexes(&mut self.adjacency, &edge);
        debug!(edge_id = %id, from = %edge.from, to = %edge.to, "removed edge");
        Some(edge)
    }

    /// Remove every edge that starts or ends at `node`.
    ///
    /// This is the cascade a persistence layer runs when it destroys a node.
    /// A self-loop is counted once.
    ///
    /// # Returns
    ///
    /// The number of edges removed.
    pub fn remove_all_for_node(&mut self, node: NodeId) -> usize {
        let mut ids: Vec<EdgeId> = self.adjacency.outgoing_edge_ids(node).collect();
        ids.extend(self.adjacency.incoming_edge_ids(node));
        ids.sort_unstable();
        ids.dedup();

        let removed = ids.into_iter().filter(|&id| self.remove(id).is_some()).count();
        debug!(%node, removed, "removed edges for node");
        removed
    }

    /// Get an edge by ID.
    #[must_use]
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Get an edge by ID, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn get_or_error(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.get(id).ok_or(GraphError::EdgeNotFound(id))
    }

    /// Check if an edge exists.
    #[must_use]
    pub fn contains(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Iterate over all edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Count all edges in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the store holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The adjacency index kept in step with this store.
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Outgoing edges of `node`, in insertion order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.neighbors(node, Direction::Outgoing)
    }

    /// Incoming edges of `node`, in insertion order.
    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.neighbors(node, Direction::Incoming)
    }

    /// Edges followed from `node` in `direction`, in insertion order.
    pub fn neighbors(
        &self,
        node: NodeId,
        direction: Direction,
    ) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.edge_ids(node, direction).filter_map(move |id| self.edges.get(&id))
    }

    /// Rebuild the adjacency index from the stored edges.
    ///
    /// # Returns
    ///
    /// The number of edges indexed.
    pub fn rebuild_index(&mut self) -> usize {
        let indexed = IndexMaintenance::rebuild(&mut self.adjacency, self.edges.values());
        debug!(indexed, "rebuilt adjacency index");
        indexed
    }
}
