//! Node-level operations.
//!
//! Nodes belong to the embedding application. It tells the graph which id a
//! node has by implementing [`GraphNode`], then works through a [`NodeRef`]
//! obtained from [`Graph::node`].
//!
//! ```
//! use oqgraph::{Graph, GraphNode, NodeId};
//!
//! struct City {
//!     id: u64,
//! }
//!
//! impl GraphNode for City {
//!     fn node_id(&self) -> NodeId {
//!         NodeId::new(self.id)
//!     }
//! }
//!
//! let (york, leeds) = (City { id: 1 }, City { id: 2 });
//! let graph = Graph::new();
//! graph.node(&york).create_weighted_edge_to(&leeds, 25.0)?;
//!
//! assert_eq!(graph.node(&york).path_weight_to(&leeds)?, 25.0);
//! assert!(graph.node(&leeds).is_originating(&york)?);
//! # Ok::<(), oqgraph::Error>(())
//! ```

use oqgraph_core::{Direction, Edge, EdgeId, NodeId, Query};

use crate::error::Result;
use crate::graph::Graph;
use crate::result::QueryResult;

/// Maps an application node to its graph identifier.
pub trait GraphNode {
    /// The id this node is stored under.
    fn node_id(&self) -> NodeId;
}

impl GraphNode for NodeId {
    fn node_id(&self) -> NodeId {
        *self
    }
}

impl<T: GraphNode + ?Sized> GraphNode for &T {
    fn node_id(&self) -> NodeId {
        (**self).node_id()
    }
}

/// Algorithm used by [`NodeRef::shortest_path_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMethod {
    /// Minimum total weight.
    #[default]
    Dijkstra,
    /// Fewest hops, ignoring weight.
    BreadthFirst,
}

/// A node of one [`Graph`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> NodeRef<'g> {
    pub(crate) const fn new(graph: &'g Graph, id: NodeId) -> Self {
        Self { graph, id }
    }

    /// This node's id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Create a one-way edge to `other` with the graph's default weight.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-weight error if the configured default weight is
    /// negative, NaN or infinite. [`GraphBuilder::build`] rejects such a
    /// configuration, so this only happens for a graph built some other way.
    /// Also fails once edge IDs are exhausted or if the store lock is poisoned.
    ///
    /// [`GraphBuilder::build`]: crate::GraphBuilder::build
    pub fn create_edge_to(&self, other: impl GraphNode) -> Result<EdgeId> {
        self.create_weighted_edge_to(other, self.graph.config().default_weight)
    }

    /// Create a one-way edge to `other`.
    ///
    /// # Errors
    ///
    /// Fails if `weight` is negative, NaN or infinite.
    pub fn create_weighted_edge_to(&self, other: impl GraphNode, weight: f64) -> Result<EdgeId> {
        self.graph.insert_edge(self.id, other.node_id(), weight)
    }

    /// Create edges both ways between this node and `other`, default weight.
    ///
    /// Returns `(self -> other, other -> self)`.
    ///
    /// # Errors
    ///
    /// Fails, creating neither edge, if the configured default weight is
    /// invalid (see [`Self::create_edge_to`]) or edge IDs run out. Also fails
    /// if the store lock is poisoned.
    pub fn create_edge_to_and_from(&self, other: impl GraphNode) -> Result<(EdgeId, EdgeId)> {
        self.create_weighted_edge_to_and_from(other, self.graph.config().default_weight)
    }

    /// Create edges both ways between this node and `other`.
    ///
    /// # Errors
    ///
    /// Fails, creating neither edge, if `weight` is invalid.
    pub fn create_weighted_edge_to_and_from(
        &self,
        other: impl GraphNode,
        weight: f64,
    ) -> Result<(EdgeId, EdgeId)> {
        self.graph.insert_edge_pair(self.id, other.node_id(), weight)
    }

    /// Shortest path from this node to `other`.
    ///
    /// The rows hold the path edges in order; the path to this node itself
    /// is empty.
    ///
    /// # Errors
    ///
    /// Fails with a no-path error if `other` cannot be reached.
    pub fn shortest_path_to(&self, other: impl GraphNode, method: PathMethod) -> Result<QueryResult> {
        let destination = other.node_id();
        let query = match method {
            PathMethod::Dijkstra => Query::shortest_path(self.id, destination),
            PathMethod::BreadthFirst => Query::reachable(self.id).with_destination(destination),
        };
        self.graph.query(&query)
    }

    /// Total weight of the minimum-weight path to `other`.
    ///
    /// Zero for the path to this node itself or for an all-zero-weight path.
    ///
    /// # Errors
    ///
    /// Fails with a no-path error if `other` cannot be reached. An
    /// unreachable node never weighs zero. Fails with a weight-overflow error
    /// if the lightest path sums past the largest finite `f64`, so the
    /// returned weight is always finite.
    pub fn path_weight_to(&self, other: impl GraphNode) -> Result<f64> {
        Ok(self.shortest_path_to(other, PathMethod::Dijkstra)?.total_weight())
    }

    /// Every node that can reach this node, in discovery order.
    ///
    /// # Errors
    ///
    /// Fails if the configured visit limit trips.
    pub fn originating(&self) -> Result<QueryResult> {
        self.graph.query(&Query::reachable(self.id).with_direction(Direction::Incoming))
    }

    /// Every node this node can reach, in discovery order.
    ///
    /// # Errors
    ///
    /// Fails if the configured visit limit trips.
    pub fn reachable(&self) -> Result<QueryResult> {
        self.graph.query(&Query::reachable(self.id))
    }

    /// One-hop predecessors: a row per edge arriving at this node.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn originating_neighbours(&self) -> Result<QueryResult> {
        self.graph.query(&Query::direct(self.id).with_direction(Direction::Incoming))
    }

    /// One-hop successors: a row per edge leaving this node.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn reachable_neighbours(&self) -> Result<QueryResult> {
        self.graph.query(&Query::direct(self.id))
    }

    /// Whether `other` can reach this node.
    ///
    /// # Errors
    ///
    /// Fails if the configured visit limit trips.
    pub fn is_originating(&self, other: impl GraphNode) -> Result<bool> {
        Ok(self.originating()?.contains_node(other.node_id()))
    }

    /// Whether this node can reach `other`.
    ///
    /// # Errors
    ///
    /// Fails if the configured visit limit trips.
    pub fn is_reachable(&self, other: impl GraphNode) -> Result<bool> {
        Ok(self.reachable()?.contains_node(other.node_id()))
    }

    /// Edges leaving this node, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn outgoing_edges(&self) -> Result<Vec<Edge>> {
        self.graph.outgoing_edges(self.id)
    }

    /// Edges arriving at this node, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn incoming_edges(&self) -> Result<Vec<Edge>> {
        self.graph.incoming_edges(self.id)
    }

    /// Targets of the outgoing edges, one per edge.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn outgoing_nodes(&self) -> Result<Vec<NodeId>> {
        Ok(self.outgoing_edges()?.into_iter().map(|edge| edge.to).collect())
    }

    /// Sources of the incoming edges, one per edge.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn incoming_nodes(&self) -> Result<Vec<NodeId>> {
        Ok(self.incoming_edges()?.into_iter().map(|edge| edge.from).collect())
    }

    /// Remove every edge touching this node. Returns the number removed.
    ///
    /// # Errors
    ///
    /// Fails only if the store lock is poisoned.
    pub fn remove_all_edges(&self) -> Result<usize> {
        self.graph.remove_all_for_node(self.id)
    }
}

impl GraphNode for NodeRef<'_> {
    fn node_id(&self) -> NodeId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use oqgraph_core::DEFAULT_WEIGHT;
    use oqgraph_graph::store::GraphError;

    use super::*;
    use crate::error::Error;

    fn node(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn default_weight_comes_from_config() {
        let graph = Graph::builder().default_weight(3.0).build().expect("build");
        graph.node(node(1)).create_edge_to(node(2)).expect("edge");
        assert_eq!(graph.node(node(1)).path_weight_to(node(2)).expect("weight"), 3.0);
    }

    #[test]
    fn associations_follow_insertion_order() {
        let graph = Graph::new();
        let hub = graph.node(node(1));
        hub.create_edge_to(node(3)).expect("edge");
        hub.create_edge_to(node(2)).expect("edge");
        graph.node(node(4)).create_edge_to(&hub).expect("edge");

        assert_eq!(hub.outgoing_nodes().expect("out"), vec![node(3), node(2)]);
        assert_eq!(hub.incoming_nodes().expect("in"), vec![node(4)]);
        assert_eq!(hub.reachable_neighbours().expect("direct").nodes(), vec![node(3), node(2)]);
        assert_eq!(hub.originating_neighbours().expect("direct").nodes(), vec![node(4)]);
    }

    #[test]
    fn breadth_first_ignores_weight() {
        let graph = Graph::new();
        let a = graph.node(node(1));
        a.create_weighted_edge_to(node(2), 1.0).expect("edge");
        graph.node(node(2)).create_weighted_edge_to(node(3), 1.0).expect("edge");
        a.create_weighted_edge_to(node(3), 10.0).expect("edge");

        let weighted = a.shortest_path_to(node(3), PathMethod::Dijkstra).expect("dijkstra");
        assert_eq!(weighted.len(), 2);

        let hops = a.shortest_path_to(node(3), PathMethod::BreadthFirst).expect("bfs");
        assert_eq!(hops.len(), 1);
        assert_eq!(hops.total_weight(), 10.0);
    }

    #[test]
    fn default_weight_edges_pair_up() {
        let graph = Graph::new();
        let (forward, backward) =
            graph.node(node(1)).create_edge_to_and_from(node(2)).expect("pair");

        let forward = graph.get_edge(forward).expect("read").expect("forward edge");
        let backward = graph.get_edge(backward).expect("read").expect("backward edge");
        assert_eq!((forward.from, forward.to, forward.weight), (node(1), node(2), DEFAULT_WEIGHT));
        assert_eq!((backward.from, backward.to, backward.weight), (node(2), node(1), DEFAULT_WEIGHT));
    }

    #[test]
    fn invalid_default_weight_never_reaches_a_graph() {
        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            let result = Graph::builder().default_weight(weight).build();
            assert!(matches!(result, Err(Error::Config(_))), "{weight}");
        }
    }

    #[test]
    fn exhausted_ids_leave_no_half_pair() {
        let graph = Graph::new();
        let last = Edge::new(EdgeId::new(u64::MAX - 2), node(8), node(9), 1.0);
        graph.write().expect("lock").insert_with_id(last).expect("restore");

        let result = graph.node(node(1)).create_edge_to_and_from(node(2));
        assert!(matches!(result, Err(Error::Graph(GraphError::IdsExhausted))));
        assert_eq!(graph.edge_count().expect("count"), 1);
        assert!(graph.outgoing_edges(node(1)).expect("out").is_empty());
        assert!(graph.incoming_edges(node(2)).expect("in").is_empty());
    }
}
