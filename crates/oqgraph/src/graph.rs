//! The thread-safe graph handle.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use oqgraph_core::{validate_weight, Direction, Edge, EdgeId, NodeId, Query};
use oqgraph_graph::store::EdgeStore;
use oqgraph_graph::traversal::TraversalEngine;

use crate::config::{GraphBuilder, GraphConfig};
use crate::error::{Error, Result};
use crate::node::{GraphNode, NodeRef};
use crate::result::QueryResult;

/// One logical graph: its edges, their adjacency index and the query surface.
///
/// `Graph` is `Send + Sync`. Queries take a shared lock on the edge store and
/// run concurrently with each other; mutations take the exclusive lock, so a
/// query observes each mutation either entirely or not at all.
///
/// There is no global registry. Construct one `Graph` per logical graph and
/// pass it by reference (or inside an `Arc`) to whoever needs it.
///
/// # Example
///
/// ```
/// use oqgraph::{Graph, NodeId};
///
/// let graph = Graph::new();
/// let (a, b, c) = (NodeId::new(1), NodeId::new(2), NodeId::new(3));
/// graph.insert_edge(a, b, 1.0)?;
/// graph.insert_edge(b, c, 1.0)?;
///
/// let reach = graph.reachable(2, a)?;
/// assert_eq!(reach.nodes(), vec![b, c]);
/// # Ok::<(), oqgraph::Error>(())
/// ```
#[derive(Debug)]
pub struct Graph {
    store: RwLock<EdgeStore>,
    config: GraphConfig,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a builder for a configured graph.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Called by [`GraphBuilder::build`] after validation.
    pub(crate) fn with_config(config: GraphConfig) -> Self {
        Self { store: RwLock::new(EdgeStore::new()), config }
    }

    /// The configuration this graph was built with.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// A handle for node-level operations on `node`.
    pub fn node(&self, node: impl GraphNode) -> NodeRef<'_> {
        NodeRef::new(self, node.node_id())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a directed edge and index it.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-weight error, leaving the graph unchanged, if
    /// `weight` is negative, NaN or infinite. Fails with an id-exhaustion
    /// error once no edge ID is left, or if the store lock is poisoned.
    pub fn insert_edge(&self, from: NodeId, to: NodeId, weight: f64) -> Result<EdgeId> {
        let id = self.write()?.insert(from, to, weight)?;
        Ok(id)
    }

    /// Insert `a -> b` and `b -> a` with the same weight.
    ///
    /// The two edges are independent records: removing one leaves the other.
    /// Both are inserted under one write lock, so no query sees only half.
    ///
    /// # Errors
    ///
    /// Fails before inserting anything if `weight` is invalid. If the second
    /// edge cannot get an ID the first is removed again, so the pair is
    /// never left half inserted.
    pub fn insert_edge_pair(&self, a: NodeId, b: NodeId, weight: f64) -> Result<(EdgeId, EdgeId)> {
        validate_weight(weight)?;
        let mut store = self.write()?;
        let forward = store.insert(a, b, weight)?;
        match store.insert(b, a, weight) {
            Ok(backward) => Ok((forward, backward)),
            Err(err) => {
                store.remove(forward);
                Err(err.into())
            }
        }
    }

    /// Remove one edge. Returns whether an edge was removed.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn remove_edge(&self, id: EdgeId) -> Result<bool> {
        Ok(self.write()?.remove(id).is_some())
    }

    /// Remove every edge touching `node`, in either direction.
    ///
    /// The embedding application calls this when it destroys a node. Returns
    /// the number of edges removed.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn remove_all_for_node(&self, node: NodeId) -> Result<usize> {
        Ok(self.write()?.remove_all_for_node(node))
    }

    /// Re-derive the adjacency index from the stored edges.
    ///
    /// Returns the number of edges indexed.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn rebuild_index(&self) -> Result<usize> {
        Ok(self.write()?.rebuild_index())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get an edge by id.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn get_edge(&self, id: EdgeId) -> Result<Option<Edge>> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Number of stored edges.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn edge_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Snapshot of every edge in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn edges(&self) -> Result<Vec<Edge>> {
        Ok(self.read()?.iter().cloned().collect())
    }

    /// Edges leaving `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn outgoing_edges(&self, node: NodeId) -> Result<Vec<Edge>> {
        self.adjacent_edges(node, Direction::Outgoing)
    }

    /// Edges arriving at `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn incoming_edges(&self, node: NodeId) -> Result<Vec<Edge>> {
        self.adjacent_edges(node, Direction::Incoming)
    }

    fn adjacent_edges(&self, node: NodeId, direction: Direction) -> Result<Vec<Edge>> {
        Ok(self.read()?.neighbors(node, direction).cloned().collect())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Run a query against a consistent snapshot of the graph.
    ///
    /// # Errors
    ///
    /// - a missing-destination error for a shortest-path query without one
    /// - a no-path error when the destination cannot be reached
    /// - a visit-limit error when the configured limit trips
    pub fn query(&self, query: &Query) -> Result<QueryResult> {
        let store = self.read()?;
        let rows = self.engine(&store).execute(query)?;
        Ok(QueryResult::new(rows))
    }

    /// Answer a query keyed by its destination: who leads to `destid`.
    ///
    /// `latch` is the numeric mode code: 0 lists the edges arriving at
    /// `destid`, 2 discovers every node that can reach it. Latch 1 needs both
    /// endpoints and fails with a missing-destination error here.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-latch error for codes other than 0, 1 and 2.
    pub fn originating(&self, latch: u8, destid: NodeId) -> Result<QueryResult> {
        self.query_code(latch, destid, None, Direction::Incoming)
    }

    /// Answer a query keyed by its origin: where `origid` leads.
    ///
    /// `latch` 0 lists the edges leaving `origid`, 2 discovers every node it
    /// can reach. Latch 1 needs both endpoints and fails here.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-latch error for codes other than 0, 1 and 2.
    pub fn reachable(&self, latch: u8, origid: NodeId) -> Result<QueryResult> {
        self.query_code(latch, origid, None, Direction::Outgoing)
    }

    /// Answer a query keyed by both endpoints.
    ///
    /// `latch` 0 lists the direct edges `origid -> destid`, 1 finds the
    /// minimum-weight path and 2 the fewest-hops path.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-latch error for unknown codes and with a no-path
    /// error when latch 1 or 2 cannot reach `destid`.
    pub fn shortest_path(&self, latch: u8, origid: NodeId, destid: NodeId) -> Result<QueryResult> {
        self.query_code(latch, origid, Some(destid), Direction::Outgoing)
    }

    fn query_code(
        &self,
        latch: u8,
        origin: NodeId,
        destination: Option<NodeId>,
        direction: Direction,
    ) -> Result<QueryResult> {
        let store = self.read()?;
        let rows = self.engine(&store).execute_code(latch, origin, destination, direction)?;
        Ok(QueryResult::new(rows))
    }

    fn engine<'s>(&self, store: &'s EdgeStore) -> TraversalEngine<'s> {
        TraversalEngine::new(store).with_limits(self.config.traversal_limits())
    }

    // ========================================================================
    // Locking
    // ========================================================================

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, EdgeStore>> {
        self.store.read().map_err(|_| Error::LockPoisoned("edge store".to_owned()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, EdgeStore>> {
        self.store.write().map_err(|_| Error::LockPoisoned("edge store".to_owned()))
    }
}
