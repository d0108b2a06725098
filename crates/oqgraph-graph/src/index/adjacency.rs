//! Adjacency list index for graph traversal.

use std::collections::{BTreeSet, HashMap};

use oqgraph_core::{Direction, EdgeId, NodeId};

/// Adjacency list index for neighbor lookups.
///
/// Lookups are a hash lookup followed by an ordered scan, so listing the `k`
/// edges of a node costs O(k). Inserting or removing an entry costs
/// O(log d) in the node's degree `d`.
///
/// Nodes whose last incident edge is removed are dropped from the index
/// entirely; an unknown node and a node without edges look the same.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    outgoing: HashMap<NodeId, BTreeSet<EdgeId>>,
    incoming: HashMap<NodeId, BTreeSet<EdgeId>>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs of all outgoing edges of `source`, in insertion order.
    pub fn outgoing_edge_ids(&self, source: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        Self::scan(&self.outgoing, source)
    }

    /// IDs of all incoming edges of `target`, in insertion order.
    pub fn incoming_edge_ids(&self, target: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        Self::scan(&self.incoming, target)
    }

    /// IDs of the edges followed from `node` in `direction`.
    pub fn edge_ids(
        &self,
        node: NodeId,
        direction: Direction,
    ) -> impl Iterator<Item = EdgeId> + '_ {
        match direction {
            Direction::Outgoing => Self::scan(&self.outgoing, node),
            Direction::Incoming => Self::scan(&self.incoming, node),
        }
    }

    /// Count outgoing edges of `source`.
    #[must_use]
    pub fn count_outgoing(&self, source: NodeId) -> usize {
        self.outgoing.get(&source).map_or(0, BTreeSet::len)
    }

    /// Count incoming edges of `target`.
    #[must_use]
    pub fn count_incoming(&self, target: NodeId) -> usize {
        self.incoming.get(&target).map_or(0, BTreeSet::len)
    }

    /// Whether `node` has any incident edge.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.outgoing.contains_key(&node) || self.incoming.contains_key(&node)
    }

    /// Number of distinct nodes with at least one incident edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.outgoing.keys().filter(|node| !self.incoming.contains_key(node)).count()
            + self.incoming.len()
    }

    pub(crate) fn add_outgoing(&mut self, source: NodeId, edge_id: EdgeId) {
        self.outgoing.entry(source).or_default().insert(edge_id);
    }

    pub(crate) fn add_incoming(&mut self, target: NodeId, edge_id: EdgeId) {
        self.incoming.entry(target).or_default().insert(edge_id);
    }

    pub(crate) fn remove_outgoing(&mut self, source: NodeId, edge_id: EdgeId) {
        Self::remove_entry(&mut self.outgoing, source, edge_id);
    }

    pub(crate) fn remove_incoming(&mut self, target: NodeId, edge_id: EdgeId) {
        Self::remove_entry(&mut self.incoming, target, edge_id);
    }

    pub(crate) fn clear(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }

    fn scan(
        lists: &HashMap<NodeId, BTreeSet<EdgeId>>,
        node: NodeId,
    ) -> impl Iterator<Item = EdgeId> + '_ {
        lists.get(&node).into_iter().flatten().copied()
    }

    fn remove_entry(lists: &mut HashMap<NodeId, BTreeSet<EdgeId>>, node: NodeId, edge_id: EdgeId) {
        if let Some(ids) = lists.get_mut(&node) {
            ids.remove(&edge_id);
            if ids.is_empty() {
                lists.remove(&node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_has_no_edges() {
        let index = AdjacencyIndex::new();
        assert_eq!(index.outgoing_edge_ids(NodeId::new(1)).count(), 0);
        assert_eq!(index.count_incoming(NodeId::new(1)), 0);
        assert!(!index.contains_node(NodeId::new(1)));
    }

    #[test]
    fn entries_iterate_in_id_order() {
        let mut index = AdjacencyIndex::new();
        let a = NodeId::new(1);
        for id in [3, 1, 2] {
            index.add_outgoing(a, EdgeId::new(id));
        }
        let ids: Vec<u64> = index.outgoing_edge_ids(a).map(EdgeId::as_u64).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn removing_last_entry_drops_node() {
        let mut index = AdjacencyIndex::new();
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        index.add_outgoing(a, EdgeId::new(1));
        index.add_incoming(b, EdgeId::new(1));
        assert_eq!(index.node_count(), 2);

        index.remove_outgoing(a, EdgeId::new(1));
        index.remove_incoming(b, EdgeId::new(1));
        assert_eq!(index.node_count(), 0);
        assert!(!index.contains_node(a));
    }

    #[test]
    fn node_count_counts_each_node_once() {
        let mut index = AdjacencyIndex::new();
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        // a -> b and b -> a
        index.add_outgoing(a, EdgeId::new(1));
        index.add_incoming(b, EdgeId::new(1));
        index.add_outgoing(b, EdgeId::new(2));
        index.add_incoming(a, EdgeId::new(2));
        assert_eq!(index.node_count(), 2);
    }
}
