//! Edge types for the graph.
//!
//! An [`Edge`] is a directed, weighted relation between two node ids. Several
//! edges may connect the same ordered pair; each is stored independently.
//!
//! # Example
//!
//! ```
//! use oqgraph_core::{Direction, Edge, EdgeId, NodeId};
//!
//! let edge = Edge::new(EdgeId::new(1), NodeId::new(10), NodeId::new(20), 2.5);
//!
//! assert_eq!(edge.far_end(Direction::Outgoing), NodeId::new(20));
//! assert_eq!(edge.far_end(Direction::Incoming), NodeId::new(10));
//! ```

use serde::{Deserialize, Serialize};

use super::{Direction, EdgeId, NodeId};
use crate::error::CoreError;

/// Weight given to edges created without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Check that `weight` is usable as an edge weight.
///
/// Weights must be finite and non-negative; shortest-path results are only
/// optimal under that precondition. Each weight is checked on its own, so a
/// path of several weights near `f64::MAX` can still sum past the largest
/// finite `f64`. Shortest-path queries report that case as an overflow error
/// instead of an infinite weight.
///
/// # Errors
///
/// Returns [`CoreError::InvalidWeight`] for NaN, infinite or negative weights.
pub fn validate_weight(weight: f64) -> Result<f64, CoreError> {
    if weight.is_nan() {
        return Err(CoreError::InvalidWeight { weight, reason: "weight is NaN" });
    }
    if weight.is_infinite() {
        return Err(CoreError::InvalidWeight { weight, reason: "weight is not finite" });
    }
    if weight < 0.0 {
        return Err(CoreError::InvalidWeight { weight, reason: "weight is negative" });
    }
    Ok(weight)
}

/// A directed, weighted edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// The node the edge leaves.
    pub from: NodeId,
    /// The node the edge enters.
    pub to: NodeId,
    /// Non-negative, finite traversal cost.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    ///
    /// The weight is not validated here; stores validate on insert.
    #[must_use]
    pub const fn new(id: EdgeId, from: NodeId, to: NodeId, weight: f64) -> Self {
        Self { id, from, to, weight }
    }

    /// The endpoint reached when following this edge in `direction`.
    #[inline]
    #[must_use]
    pub const fn far_end(&self, direction: Direction) -> NodeId {
        match direction {
            Direction::Outgoing => self.to,
            Direction::Incoming => self.from,
        }
    }

    /// The endpoint the edge is followed from in `direction`.
    #[inline]
    #[must_use]
    pub const fn near_end(&self, direction: Direction) -> NodeId {
        match direction {
            Direction::Outgoing => self.from,
            Direction::Incoming => self.to,
        }
    }
}
