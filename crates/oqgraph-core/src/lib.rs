//! `oqgraph` Core
//!
//! Value types shared by every layer of the traversal index.
//!
//! # Overview
//!
//! - **Identifiers**: [`NodeId`] for caller-owned nodes, [`EdgeId`] for stored edges
//! - **Graph primitives**: [`Edge`], a directed weighted relation between two nodes
//! - **Queries**: [`Query`] built from a [`Latch`] (the query mode) and endpoints,
//!   answered with [`ResultRow`]s ordered by `seq`
//! - **Errors**: [`CoreError`]
//!
//! # Example
//!
//! ```
//! use oqgraph_core::{Direction, Latch, NodeId, Query};
//!
//! let query = Query::new(Latch::ShortestPath, NodeId::new(1)).with_destination(NodeId::new(4));
//! assert_eq!(query.latch, Latch::ShortestPath);
//! assert_eq!(query.direction, Direction::Outgoing);
//!
//! // Numeric latch codes are accepted at the edges of the API.
//! assert_eq!(Latch::try_from(2u8).ok(), Some(Latch::Reachable));
//! assert!(Latch::try_from(7u8).is_err());
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{
    validate_weight, Direction, Edge, EdgeId, Latch, NodeId, Query, ResultRow, DEFAULT_WEIGHT,
};
