//! Query dispatch.

use oqgraph_core::{CoreError, Direction, Latch, NodeId, Query, ResultRow};
use tracing::trace;

use super::{BreadthFirst, Dijkstra, DirectLookup, TraversalLimits};
use crate::store::{EdgeStore, GraphResult};

/// Runs [`Query`]s against one consistent [`EdgeStore`] snapshot.
///
/// The engine only reads the store. Holding `&EdgeStore` for the duration of
/// a query is what gives every traversal a stable view of the graph.
#[derive(Debug, Clone, Copy)]
pub struct TraversalEngine<'a> {
    store: &'a EdgeStore,
    limits: TraversalLimits,
}

impl<'a> TraversalEngine<'a> {
    /// Create an engine over `store` with no traversal limits.
    #[must_use]
    pub const fn new(store: &'a EdgeStore) -> Self {
        Self { store, limits: TraversalLimits::unbounded() }
    }

    /// Apply visit bounds to multi-hop queries.
    #[must_use]
    pub const fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Execute `query`, selecting the algorithm by its latch.
    ///
    /// # Errors
    ///
    /// - [`GraphError::MissingDestination`](crate::store::GraphError::MissingDestination)
    ///   for a shortest-path query without a destination
    /// - [`GraphError::NoPathFound`](crate::store::GraphError::NoPathFound) when a
    ///   destination is set and unreachable (shortest path and reachable latches)
    /// - [`GraphError::VisitLimitExceeded`](crate::store::GraphError::VisitLimitExceeded)
    ///   when a traversal outgrows the configured limits
    pub fn execute(&self, query: &Query) -> GraphResult<Vec<ResultRow>> {
        trace!(
            latch = %query.latch,
            origin = %query.origin,
            destination = ?query.destination,
            direction = ?query.direction,
            "executing query"
        );

        match query.latch {
            Latch::Direct => {
                let lookup = DirectLookup::new(query.origin, query.direction);
                let lookup = match query.destination {
                    Some(destination) => lookup.with_destination(destination),
                    None => lookup,
                };
                Ok(lookup.execute(self.store))
            }
            Latch::ShortestPath => {
                let destination =
                    query.destination.ok_or(CoreError::MissingDestination(Latch::ShortestPath))?;
                Dijkstra::new(query.origin, destination, query.direction)
                    .with_limits(self.limits)
                    .find(self.store)
            }
            Latch::Reachable => {
                let bfs = BreadthFirst::new(query.origin, query.direction).with_limits(self.limits);
                let bfs = match query.destination {
                    Some(destination) => bfs.with_destination(destination),
                    None => bfs,
                };
                bfs.execute(self.store)
            }
        }
    }

    /// Execute a query given by numeric latch code.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownLatch`](crate::store::GraphError::UnknownLatch)
    /// for codes other than 0, 1 and 2, and otherwise fails like [`Self::execute`].
    pub fn execute_code(
        &self,
        latch: u8,
        origin: NodeId,
        destination: Option<NodeId>,
        direction: Direction,
    ) -> GraphResult<Vec<ResultRow>> {
        let latch = Latch::try_from(latch)?;
        let mut query = Query::new(latch, origin).with_direction(direction);
        query.destination = destination;
        self.execute(&query)
    }
}
