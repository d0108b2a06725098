//! Dijkstra's algorithm for weighted shortest path finding.
//!
//! Finds the minimum total weight path between two nodes. Weights are the
//! `weight` field of each edge, which the store guarantees to be finite and
//! non-negative, so the settled distance of a node is final.
//!
//! # Ties
//!
//! A predecessor is replaced only on a strict improvement, and the frontier
//! pops equal distances in the order they were pushed. Among equally short
//! paths the one discovered first in adjacency order wins, which keeps
//! results stable for a given graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use oqgraph_core::{Direction, Edge, NodeId, ResultRow};

use super::{number_rows, trace_back, TraversalLimits};
use crate::store::{EdgeStore, GraphError, GraphResult};

/// Entry in the priority queue for Dijkstra's algorithm.
///
/// Ordered by distance, then by push order (lower = higher priority).
#[derive(Debug, Clone, Copy)]
struct DijkstraEntry {
    node: NodeId,
    distance: f64,
    order: u64,
}

impl PartialEq for DijkstraEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Dijkstra (latch 1) shortest path finder.
///
/// # Example
///
/// ```
/// use oqgraph_core::{Direction, NodeId};
/// use oqgraph_graph::store::EdgeStore;
/// use oqgraph_graph::traversal::Dijkstra;
///
/// let (a, b, c) = (NodeId::new(1), NodeId::new(2), NodeId::new(3));
/// let mut store = EdgeStore::new();
/// store.insert(a, c, 10.0)?;
/// store.insert(a, b, 1.0)?;
/// store.insert(b, c, 1.0)?;
///
/// let path = Dijkstra::new(a, c, Direction::Outgoing).find(&store)?;
/// let total: f64 = path.iter().map(|row| row.weight()).sum();
/// assert_eq!(total, 2.0);
/// # Ok::<(), oqgraph_graph::store::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Source node.
    origin: NodeId,
    /// Target node.
    destination: NodeId,
    /// Traversal direction.
    direction: Direction,
    /// Visit bounds.
    limits: TraversalLimits,
}

impl Dijkstra {
    /// Create a new Dijkstra shortest path finder.
    #[must_use]
    pub const fn new(origin: NodeId, destination: NodeId, direction: Direction) -> Self {
        Self { origin, destination, direction, limits: TraversalLimits::unbounded() }
    }

    /// Apply visit bounds.
    #[must_use]
    pub const fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Find the shortest weighted path.
    ///
    /// # Returns
    ///
    /// The path edges as rows numbered from 1, origin to destination. The
    /// path from a node to itself is empty.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NoPathFound`] if the destination is unreachable
    /// - [`GraphError::VisitLimitExceeded`] if the search outgrows its limits
    /// - [`GraphError::WeightOverflow`] if the shortest path weighs more than
    ///   the largest finite `f64`
    pub fn find(self, store: &EdgeStore) -> GraphResult<Vec<ResultRow>> {
        if self.origin == self.destination {
            return Ok(Vec::new());
        }

        // Best known distance from origin to each node
        let mut distances: HashMap<NodeId, f64> = HashMap::new();
        // Edge used to reach each node at its best distance
        let mut parent: HashMap<NodeId, Edge> = HashMap::new();
        // Nodes whose distance is final
        let mut finalized: HashSet<NodeId> = HashSet::new();
        // Priority queue (min-heap by distance)
        let mut heap: BinaryHeap<DijkstraEntry> = BinaryHeap::new();
        let mut pushes: u64 = 0;

        distances.insert(self.origin, 0.0);
        heap.push(DijkstraEntry { node: self.origin, distance: 0.0, order: pushes });

        while let Some(DijkstraEntry { node: current, distance: current_dist, .. }) = heap.pop() {
            // Stale heap entry for a node settled earlier
            if !finalized.insert(current) {
                continue;
            }
            self.limits.check(finalized.len())?;

            if current == self.destination {
                if current_dist.is_infinite() {
                    return Err(GraphError::WeightOverflow {
                        origin: self.origin,
                        destination: self.destination,
                    });
                }
                let edges = trace_back(self.origin, self.destination, self.direction, |node| {
                    parent.get(&node).cloned()
                })?;
                return Ok(number_rows(edges, self.direction));
            }

            for edge in store.neighbors(current, self.direction) {
                let neighbor = edge.far_end(self.direction);
                if finalized.contains(&neighbor) {
                    continue;
                }

                let new_dist = current_dist + edge.weight;
                let is_better = distances.get(&neighbor).map_or(true, |&known| new_dist < known);

                if is_better {
                    distances.insert(neighbor, new_dist);
                    parent.insert(neighbor, edge.clone());
                    pushes += 1;
                    heap.push(DijkstraEntry { node: neighbor, distance: new_dist, order: pushes });
                }
            }
        }

        Err(GraphError::NoPathFound { origin: self.origin, destination: self.destination })
    }

    /// Total weight of the shortest path.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Self::find`] fails; an unreachable destination is
    /// never reported as a zero distance and the result is always finite.
    pub fn distance(self, store: &EdgeStore) -> GraphResult<f64> {
        Ok(self.find(store)?.iter().map(ResultRow::weight).sum())
    }
}
