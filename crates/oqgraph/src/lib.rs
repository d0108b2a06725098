//! # oqgraph
//!
//! An embeddable graph traversal index over weighted directed edges.
//!
//! The application owns its nodes and tells the graph about the edges between
//! them. The graph keeps an adjacency index in step with every edge mutation
//! and answers three kinds of query, selected by a latch:
//!
//! | Latch | Code | Answer |
//! |-------|------|--------|
//! | [`Latch::Direct`] | 0 | one-hop edges from a node |
//! | [`Latch::ShortestPath`] | 1 | the minimum-weight path between two nodes (Dijkstra) |
//! | [`Latch::Reachable`] | 2 | every node reachable from a node, or the fewest-hops path (BFS) |
//!
//! Each query runs forward along outgoing edges or backward along incoming
//! ones, see [`Direction`].
//!
//! ## Quick Start
//!
//! ```
//! use oqgraph::{Graph, NodeId, PathMethod};
//!
//! let graph = Graph::new();
//! let (a, b, c, d) = (NodeId::new(1), NodeId::new(2), NodeId::new(3), NodeId::new(4));
//!
//! graph.insert_edge(a, b, 1.0)?;
//! graph.insert_edge(b, c, 2.0)?;
//! graph.insert_edge(a, c, 5.0)?;
//! graph.insert_edge(c, d, 1.0)?;
//!
//! let path = graph.node(a).shortest_path_to(d, PathMethod::Dijkstra)?;
//! assert_eq!(path.nodes(), vec![b, c, d]);
//! assert_eq!(path.total_weight(), 4.0);
//!
//! assert!(graph.node(d).is_originating(a)?);
//! # Ok::<(), oqgraph::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`backup`] - JSON-lines export and import of a graph's edges
//!
//! The edge store, index and traversal algorithms live in `oqgraph-graph`;
//! the value types in `oqgraph-core`.

#![deny(clippy::unwrap_used)]

pub mod backup;
mod config;
mod error;
mod graph;
mod node;
mod result;

pub use config::{GraphBuilder, GraphConfig};
pub use error::{Error, Result};
pub use graph::Graph;
pub use node::{GraphNode, NodeRef, PathMethod};
pub use result::QueryResult;

pub use oqgraph_core::{
    CoreError, Direction, Edge, EdgeId, Latch, NodeId, Query, ResultRow, DEFAULT_WEIGHT,
};
pub use oqgraph_graph::store::GraphError;
pub use oqgraph_graph::traversal::TraversalLimits;
