//! Breadth-first (latch 2) traversal.
//!
//! Without a destination the traversal reports every node reachable from the
//! origin, each exactly once, in discovery order. With a destination it
//! reports the shortest-hop path that the first-discovery edges form.
//!
//! Weights are ignored. Cycles are harmless: a node is enqueued only the
//! first time it is discovered, and the origin counts as discovered from the
//! start, so it never appears in its own result.

use std::collections::{HashMap, HashSet, VecDeque};

use oqgraph_core::{Direction, Edge, NodeId, ResultRow};

use super::{number_rows, trace_back, TraversalLimits};
use crate::store::{EdgeStore, GraphError, GraphResult};

/// BFS traversal configuration and executor.
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirst {
    /// Starting node for traversal.
    origin: NodeId,
    /// Node to stop at, if any.
    destination: Option<NodeId>,
    /// Adjacency to follow.
    direction: Direction,
    /// Visit bounds.
    limits: TraversalLimits,
}

impl BreadthFirst {
    /// Create a new BFS traversal starting from `origin`.
    #[must_use]
    pub const fn new(origin: NodeId, direction: Direction) -> Self {
        Self { origin, destination: None, direction, limits: TraversalLimits::unbounded() }
    }

    /// Stop at `destination` and report only the path to it.
    #[must_use]
    pub const fn with_destination(mut self, destination: NodeId) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Apply visit bounds.
    #[must_use]
    pub const fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Execute the traversal.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NoPathFound`] if a destination is set and unreachable
    /// - [`GraphError::VisitLimitExceeded`] if the walk outgrows its limits
    pub fn execute(self, store: &EdgeStore) -> GraphResult<Vec<ResultRow>> {
        match self.destination {
            None => self.discover_all(store),
            Some(destination) => self.path_to(store, destination),
        }
    }

    fn discover_all(self, store: &EdgeStore) -> GraphResult<Vec<ResultRow>> {
        let mut discovered: Vec<Edge> = Vec::new();
        self.walk(store, |edge| {
            discovered.push(edge.clone());
            false
        })?;
        Ok(number_rows(discovered, self.direction))
    }

    fn path_to(self, store: &EdgeStore, destination: NodeId) -> GraphResult<Vec<ResultRow>> {
        if self.origin == destination {
            return Ok(Vec::new());
        }

        // Maps each node to the edge that first discovered it
        let mut parent: HashMap<NodeId, Edge> = HashMap::new();
        let found = self.walk(store, |edge| {
            let reached = edge.far_end(self.direction);
            parent.insert(reached, edge.clone());
            reached == destination
        })?;

        if !found {
            return Err(GraphError::NoPathFound { origin: self.origin, destination });
        }
        let edges =
            trace_back(self.origin, destination, self.direction, |node| parent.get(&node).cloned())?;
        Ok(number_rows(edges, self.direction))
    }

    /// Breadth-first walk calling `on_discover` with each first-discovery edge.
    ///
    /// Stops early and returns `true` as soon as `on_discover` does.
    fn walk<F>(&self, store: &EdgeStore, mut on_discover: F) -> GraphResult<bool>
    where
        F: FnMut(&Edge) -> bool,
    {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        visited.insert(self.origin);
        self.limits.check(visited.len())?;
        queue.push_back(self.origin);

        while let Some(current) = queue.pop_front() {
            for edge in store.neighbors(current, self.direction) {
                let next = edge.far_end(self.direction);
                if !visited.insert(next) {
                    continue;
                }
                self.limits.check(visited.len())?;

                if on_discover(edge) {
                    return Ok(true);
                }
                queue.push_back(next);
            }
        }

        Ok(false)
    }
}
