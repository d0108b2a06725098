//! Graph traversal algorithms.
//!
//! This module implements the three query latches over an
//! [`EdgeStore`](crate::store::EdgeStore) snapshot:
//!
//! - [`DirectLookup`] - one-hop adjacency (latch 0)
//! - [`Dijkstra`] - minimum total weight path (latch 1)
//! - [`BreadthFirst`] - unweighted reachability and shortest-hop paths (latch 2)
//! - [`TraversalEngine`] - dispatches a [`Query`](oqgraph_core::Query) to one of the above
//!
//! # Direction
//!
//! Every algorithm follows either outgoing edges (`from -> to`) or incoming
//! edges (`to -> from`), chosen by [`Direction`](oqgraph_core::Direction).
//!
//! # Result rows
//!
//! All algorithms answer with [`ResultRow`](oqgraph_core::ResultRow)s whose
//! `seq` starts at 1. Each row names the node it reaches and the edge that
//! reached it.
//!
//! # Example
//!
//! ```
//! use oqgraph_core::{NodeId, Query};
//! use oqgraph_graph::store::EdgeStore;
//! use oqgraph_graph::traversal::TraversalEngine;
//!
//! let (a, b, c) = (NodeId::new(1), NodeId::new(2), NodeId::new(3));
//! let mut store = EdgeStore::new();
//! store.insert(a, b, 1.0)?;
//! store.insert(b, c, 2.0)?;
//! store.insert(a, c, 5.0)?;
//!
//! let rows = TraversalEngine::new(&store).execute(&Query::shortest_path(a, c))?;
//! let hops: Vec<NodeId> = rows.iter().map(|row| row.node).collect();
//! assert_eq!(hops, vec![b, c]);
//! # Ok::<(), oqgraph_graph::store::GraphError>(())
//! ```

mod bfs;
mod dijkstra;
mod direct;
mod engine;

pub use bfs::BreadthFirst;
pub use dijkstra::Dijkstra;
pub use direct::DirectLookup;
pub use engine::TraversalEngine;

use oqgraph_core::{Direction, Edge, NodeId, ResultRow};
use tracing::warn;

use crate::store::{GraphError, GraphResult};

/// Bounds applied to multi-hop traversals.
///
/// The core algorithms are CPU-bound and have no deadline of their own;
/// a visit limit is how callers cap the work a single query may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Maximum number of nodes a traversal may reach, origin and destination
    /// included. Dijkstra counts a node when it is settled and breadth-first
    /// search when it is discovered; either way the same limited query fails
    /// or succeeds under both latches. `None` means unbounded.
    pub max_visited_nodes: Option<usize>,
}

impl TraversalLimits {
    /// Limits that never stop a traversal.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_visited_nodes: None }
    }

    /// Cap the number of reached nodes.
    #[must_use]
    pub const fn with_max_visited_nodes(mut self, max: usize) -> Self {
        self.max_visited_nodes = Some(max);
        self
    }

    /// Fail once `visited` exceeds the configured maximum.
    pub(crate) fn check(&self, visited: usize) -> GraphResult<()> {
        match self.max_visited_nodes {
            Some(limit) if visited > limit => {
                warn!(limit, visited, "traversal visit limit exceeded");
                Err(GraphError::VisitLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

/// Number edges into rows, `seq` starting at 1, naming each edge's far end.
pub(crate) fn number_rows<I>(edges: I, direction: Direction) -> Vec<ResultRow>
where
    I: IntoIterator<Item = Edge>,
{
    edges
        .into_iter()
        .zip(1u64..)
        .map(|(edge, seq)| ResultRow::new(seq, edge.far_end(direction), edge))
        .collect()
}

/// Walk a predecessor map back from `destination` to `origin`.
///
/// Returns the edges in origin-to-destination order.
pub(crate) fn trace_back<F>(
    origin: NodeId,
    destination: NodeId,
    direction: Direction,
    mut predecessor: F,
) -> GraphResult<Vec<Edge>>
where
    F: FnMut(NodeId) -> Option<Edge>,
{
    let mut edges = Vec::new();
    let mut current = destination;
    while current != origin {
        let edge = predecessor(current).ok_or_else(|| {
            GraphError::Internal(format!("predecessor chain broken at node {current}"))
        })?;
        current = edge.near_end(direction);
        edges.push(edge);
    }
    edges.reverse();
    Ok(edges)
}
