//! Concurrent readers and writers sharing one graph.

use std::sync::Arc;
use std::thread;

use oqgraph::{Graph, NodeId};

fn node(id: u64) -> NodeId {
    NodeId::new(id)
}

#[test]
fn concurrent_readers_see_consistent_paths() {
    let graph = Arc::new(Graph::new());
    for i in 0..100u64 {
        graph.insert_edge(node(i), node(i + 1), 1.0).unwrap();
    }

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                for _ in 0..20 {
                    let weight = graph.node(node(0)).path_weight_to(node(100)).unwrap();
                    assert_eq!(weight, 100.0);
                    assert_eq!(graph.node(node(0)).reachable().unwrap().len(), 100);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn two_way_inserts_are_never_seen_half_done() {
    let graph = Arc::new(Graph::new());

    let writer = {
        let graph = Arc::clone(&graph);
        thread::spawn(move || {
            for i in 0..500u64 {
                graph.insert_edge_pair(node(i), node(i + 10_000), 1.0).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                for _ in 0..200 {
                    let count = graph.edge_count().unwrap();
                    assert_eq!(count % 2, 0, "observed half of a two-way insert");
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(graph.edge_count().unwrap(), 1000);
}

#[test]
fn mixed_writers_keep_index_in_step() {
    let graph = Arc::new(Graph::new());

    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                let base = t * 1_000;
                for i in 0..100u64 {
                    let id = graph.insert_edge(node(base), node(base + i + 1), 1.0).unwrap();
                    if i % 2 == 0 {
                        assert!(graph.remove_edge(id).unwrap());
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(graph.edge_count().unwrap(), 200);
    for t in 0..4u64 {
        let hub = graph.node(node(t * 1_000));
        assert_eq!(hub.outgoing_edges().unwrap().len(), 50);
        assert_eq!(hub.reachable_neighbours().unwrap().len(), 50);
    }
}
