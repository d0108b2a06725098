//! Property-based tests for graph invariants.
//!
//! These hold regardless of the edges inserted or the order of operations.

use proptest::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;

use oqgraph::{backup, Graph, NodeId, PathMethod};

const NODES: u64 = 10;

fn build(edges: &[(u64, u64, u32)]) -> Graph {
    let graph = Graph::new();
    for &(from, to, weight) in edges {
        graph.insert_edge(NodeId::new(from), NodeId::new(to), f64::from(weight)).expect("insert");
    }
    graph
}

fn edges_strategy() -> impl Strategy<Value = Vec<(u64, u64, u32)>> {
    prop::collection::vec((0..NODES, 0..NODES, 0u32..20), 0..40)
}

// ============================================================================
// Mutation Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Edge ids are unique across inserts
    #[test]
    fn prop_edge_ids_unique(edges in edges_strategy()) {
        let graph = Graph::new();
        let mut ids = HashSet::new();
        for (from, to, weight) in edges {
            let id = graph
                .insert_edge(NodeId::new(from), NodeId::new(to), f64::from(weight))
                .expect("insert");
            prop_assert!(ids.insert(id), "ID should be unique");
        }
    }

    /// After a cascade no edge touches the removed node
    #[test]
    fn prop_cascade_leaves_no_edges(edges in edges_strategy(), victim in 0..NODES) {
        let graph = build(&edges);
        let victim = NodeId::new(victim);
        let before = graph.edge_count().expect("count");

        let removed = graph.remove_all_for_node(victim).expect("cascade");
        let touching = edges
            .iter()
            .filter(|(from, to, _)| NodeId::new(*from) == victim || NodeId::new(*to) == victim)
            .count();
        prop_assert_eq!(removed, touching);
        prop_assert_eq!(graph.edge_count().expect("count"), before - removed);

        let node = graph.node(victim);
        prop_assert!(node.outgoing_edges().expect("out").is_empty());
        prop_assert!(node.incoming_edges().expect("in").is_empty());
        prop_assert!(node.reachable().expect("reach").is_empty());
    }
}

// ============================================================================
// Query Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `b` is reachable from `a` exactly when `a` originates `b`
    #[test]
    fn prop_reachable_mirrors_originating(edges in edges_strategy(), a in 0..NODES, b in 0..NODES) {
        let graph = build(&edges);
        let (a, b) = (NodeId::new(a), NodeId::new(b));
        prop_assert_eq!(
            graph.node(a).is_reachable(b).expect("reachable"),
            graph.node(b).is_originating(a).expect("originating")
        );
    }

    /// A path exists exactly when the destination is reachable
    #[test]
    fn prop_path_iff_reachable(edges in edges_strategy(), a in 0..NODES, b in 0..NODES) {
        prop_assume!(a != b);
        let graph = build(&edges);
        let (a, b) = (NodeId::new(a), NodeId::new(b));
        let reachable = graph.node(a).is_reachable(b).expect("reachable");
        let path = graph.node(a).shortest_path_to(b, PathMethod::Dijkstra);
        prop_assert_eq!(path.is_ok(), reachable);
        if let Err(err) = path {
            prop_assert!(err.is_recoverable());
        }
    }

    /// The weighted path never weighs more than the fewest-hops path
    #[test]
    fn prop_dijkstra_no_heavier_than_bfs(edges in edges_strategy(), a in 0..NODES, b in 0..NODES) {
        let graph = build(&edges);
        let (a, b) = (NodeId::new(a), NodeId::new(b));
        let node = graph.node(a);
        if let Ok(hops) = node.shortest_path_to(b, PathMethod::BreadthFirst) {
            let weighted = node.path_weight_to(b).expect("dijkstra must agree on reachability");
            prop_assert!(weighted <= hops.total_weight());
        }
    }

    /// A backup restores a graph that answers every query the same way
    #[test]
    fn prop_backup_preserves_answers(edges in edges_strategy(), origin in 0..NODES) {
        let source = build(&edges);
        let mut buffer = Vec::new();
        backup::export_full(&source, &mut buffer).expect("export");

        let restored = Graph::new();
        backup::import(&restored, Cursor::new(buffer)).expect("import");

        let origin = NodeId::new(origin);
        prop_assert_eq!(
            restored.node(origin).reachable().expect("reach"),
            source.node(origin).reachable().expect("reach")
        );
        prop_assert_eq!(
            restored.node(origin).originating_neighbours().expect("direct"),
            source.node(origin).originating_neighbours().expect("direct")
        );
    }
}
