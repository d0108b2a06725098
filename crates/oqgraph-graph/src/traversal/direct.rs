//! One-hop adjacency lookup.

use oqgraph_core::{Direction, NodeId, ResultRow};

use super::number_rows;
use crate::store::EdgeStore;

/// Direct (latch 0) lookup.
///
/// Lists the edges followed from `origin` in one hop, optionally only those
/// whose far end is `destination`. Rows keep adjacency (insertion) order and
/// are numbered from 1 over the matching edges.
#[derive(Debug, Clone, Copy)]
pub struct DirectLookup {
    origin: NodeId,
    destination: Option<NodeId>,
    direction: Direction,
}

impl DirectLookup {
    /// Create a lookup from `origin` following `direction`.
    #[must_use]
    pub const fn new(origin: NodeId, direction: Direction) -> Self {
        Self { origin, destination: None, direction }
    }

    /// Only keep edges whose far end is `destination`.
    #[must_use]
    pub const fn with_destination(mut self, destination: NodeId) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Run the lookup against `store`.
    #[must_use]
    pub fn execute(self, store: &EdgeStore) -> Vec<ResultRow> {
        let matching = store
            .neighbors(self.origin, self.direction)
            .filter(|edge| {
                self.destination.map_or(true, |dest| edge.far_end(self.direction) == dest)
            })
            .cloned();
        number_rows(matching, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn lists_outgoing_edges_in_insertion_order() {
        let mut store = EdgeStore::new();
        store.insert(node(1), node(3), 1.0).expect("insert");
        store.insert(node(1), node(2), 1.0).expect("insert");
        store.insert(node(2), node(1), 1.0).expect("insert");

        let rows = DirectLookup::new(node(1), Direction::Outgoing).execute(&store);
        let nodes: Vec<NodeId> = rows.iter().map(|row| row.node).collect();
        assert_eq!(nodes, vec![node(3), node(2)]);
        assert_eq!(rows.iter().map(|row| row.seq).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn destination_filters_parallel_edges() {
        let mut store = EdgeStore::new();
        store.insert(node(1), node(2), 1.0).expect("insert");
        store.insert(node(1), node(3), 1.0).expect("insert");
        store.insert(node(1), node(2), 4.0).expect("insert");

        let rows =
            DirectLookup::new(node(1), Direction::Outgoing).with_destination(node(2)).execute(&store);
        let weights: Vec<f64> = rows.iter().map(ResultRow::weight).collect();
        assert_eq!(weights, vec![1.0, 4.0]);
        assert_eq!(rows[1].seq, 2);
    }

    #[test]
    fn incoming_lookup_names_predecessors() {
        let mut store = EdgeStore::new();
        store.insert(node(5), node(1), 1.0).expect("insert");
        store.insert(node(6), node(1), 1.0).expect("insert");

        let rows = DirectLookup::new(node(1), Direction::Incoming).execute(&store);
        let nodes: Vec<NodeId> = rows.iter().map(|row| row.node).collect();
        assert_eq!(nodes, vec![node(5), node(6)]);
    }

    #[test]
    fn unknown_node_has_no_rows() {
        let store = EdgeStore::new();
        assert!(DirectLookup::new(node(42), Direction::Outgoing).execute(&store).is_empty());
    }
}
