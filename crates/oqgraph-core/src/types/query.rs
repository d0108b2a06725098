//! Query and result types.
//!
//! A [`Query`] pairs a [`Latch`] with an origin and an optional destination.
//! Every answer is an ordered list of [`ResultRow`]s whose `seq` starts at 1
//! and strictly increases; `seq` carries no meaning across distinct queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Edge, NodeId};
use crate::error::CoreError;

/// Query mode selector.
///
/// The numeric codes (`0`, `1`, `2`) are accepted through [`TryFrom<u8>`]
/// for callers that still speak in latch numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Latch {
    /// One-hop adjacency lookup.
    Direct,
    /// Minimum total weight path (Dijkstra).
    ShortestPath,
    /// Unweighted breadth-first reachability.
    Reachable,
}

impl Latch {
    /// The numeric code of this latch.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Direct => 0,
            Self::ShortestPath => 1,
            Self::Reachable => 2,
        }
    }
}

impl TryFrom<u8> for Latch {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Direct),
            1 => Ok(Self::ShortestPath),
            2 => Ok(Self::Reachable),
            other => Err(CoreError::UnknownLatch(other)),
        }
    }
}

impl fmt::Display for Latch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Direct => "direct",
            Self::ShortestPath => "shortest-path",
            Self::Reachable => "reachable",
        };
        f.write_str(name)
    }
}

/// Which adjacency a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Follow edges from `from` to `to`: who can this node reach.
    #[default]
    Outgoing,
    /// Follow edges from `to` back to `from`: who can reach this node.
    Incoming,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Outgoing => Self::Incoming,
            Self::Incoming => Self::Outgoing,
        }
    }
}

/// A traversal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    /// The query mode.
    pub latch: Latch,
    /// Node the traversal starts from.
    pub origin: NodeId,
    /// Optional node the traversal must end at.
    pub destination: Option<NodeId>,
    /// Adjacency to follow.
    pub direction: Direction,
}

impl Query {
    /// Create a query following outgoing edges with no destination.
    #[must_use]
    pub const fn new(latch: Latch, origin: NodeId) -> Self {
        Self { latch, origin, destination: None, direction: Direction::Outgoing }
    }

    /// Restrict the query to `destination`.
    #[must_use]
    pub const fn with_destination(mut self, destination: NodeId) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Follow edges in `direction`.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// A [`Latch::Direct`] query.
    #[must_use]
    pub const fn direct(origin: NodeId) -> Self {
        Self::new(Latch::Direct, origin)
    }

    /// A [`Latch::ShortestPath`] query between two nodes.
    #[must_use]
    pub const fn shortest_path(origin: NodeId, destination: NodeId) -> Self {
        Self::new(Latch::ShortestPath, origin).with_destination(destination)
    }

    /// A [`Latch::Reachable`] query.
    #[must_use]
    pub const fn reachable(origin: NodeId) -> Self {
        Self::new(Latch::Reachable, origin)
    }
}

/// One row of a query answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Position within this answer, starting at 1.
    pub seq: u64,
    /// The node this row reaches.
    pub node: NodeId,
    /// The edge that reached `node`.
    pub edge: Option<Edge>,
}

impl ResultRow {
    /// Create a row reached through `edge`.
    #[must_use]
    pub const fn new(seq: u64, node: NodeId, edge: Edge) -> Self {
        Self { seq, node, edge: Some(edge) }
    }

    /// The weight of this row's edge, zero when the row has no edge.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.edge.as_ref().map_or(0.0, |edge| edge.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdgeId;

    #[test]
    fn latch_codes_roundtrip() {
        for latch in [Latch::Direct, Latch::ShortestPath, Latch::Reachable] {
            assert_eq!(Latch::try_from(latch.code()), Ok(latch));
        }
    }

    #[test]
    fn unknown_latch_code() {
        assert_eq!(Latch::try_from(3u8), Err(CoreError::UnknownLatch(3)));
        assert_eq!(Latch::try_from(255u8), Err(CoreError::UnknownLatch(255)));
    }

    #[test]
    fn direction_default_and_reverse() {
        assert_eq!(Direction::default(), Direction::Outgoing);
        assert_eq!(Direction::Outgoing.reverse(), Direction::Incoming);
        assert_eq!(Direction::Incoming.reverse(), Direction::Outgoing);
    }

    #[test]
    fn query_builders() {
        let query = Query::shortest_path(NodeId::new(1), NodeId::new(2));
        assert_eq!(query.latch, Latch::ShortestPath);
        assert_eq!(query.destination, Some(NodeId::new(2)));

        let query = Query::reachable(NodeId::new(5)).with_direction(Direction::Incoming);
        assert_eq!(query.latch, Latch::Reachable);
        assert_eq!(query.destination, None);
        assert_eq!(query.direction, Direction::Incoming);
    }

    #[test]
    fn row_weight() {
        let edge = Edge::new(EdgeId::new(1), NodeId::new(1), NodeId::new(2), 4.5);
        let row = ResultRow::new(1, NodeId::new(2), edge);
        assert_eq!(row.weight(), 4.5);

        let bare = ResultRow { seq: 1, node: NodeId::new(2), edge: None };
        assert_eq!(bare.weight(), 0.0);
    }
}
