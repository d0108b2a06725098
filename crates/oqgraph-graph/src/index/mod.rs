//! Graph indexes for efficient traversal.
//!
//! # Overview
//!
//! - [`AdjacencyIndex`] - Per-node outgoing and incoming edge lists
//! - [`IndexMaintenance`] - Index updates applied on every edge mutation
//!
//! # Layout
//!
//! Each node with at least one incident edge maps to two ordered sets of
//! edge ids:
//!
//! - `outgoing`: `NodeId -> {EdgeId}` - edges leaving the node
//! - `incoming`: `NodeId -> {EdgeId}` - edges entering the node
//!
//! Edge ids grow with insertion, so iterating a set yields edges in the order
//! they were inserted. Only [`EdgeStore`](crate::store::EdgeStore) mutates the
//! index; queries read it.

mod adjacency;
mod maintenance;

pub use adjacency::AdjacencyIndex;
pub use maintenance::IndexMaintenance;
