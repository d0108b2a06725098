//! `oqgraph` Graph
//!
//! This crate provides edge storage, adjacency indexing, and the traversal
//! algorithms behind the three query latches.
//!
//! # Modules
//!
//! - [`store`] - Edge storage and ID generation
//! - [`index`] - Per-node adjacency lists kept in step with the store
//! - [`traversal`] - Direct lookup, Dijkstra and breadth-first traversal

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod index;
pub mod store;
pub mod traversal;
