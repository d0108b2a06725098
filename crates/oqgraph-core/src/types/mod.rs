//! Core data types for the traversal index.

mod edge;
mod id;
mod query;

pub use edge::{validate_weight, Edge, DEFAULT_WEIGHT};
pub use id::{EdgeId, NodeId};
pub use query::{Direction, Latch, Query, ResultRow};
