//! Materialized query results.

use oqgraph_core::{Edge, NodeId, ResultRow};

/// The ordered rows answered by one query.
///
/// Rows keep the order the traversal produced them in: adjacency order for
/// direct lookups, origin-to-destination order for paths, and discovery
/// order for reachability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    rows: Vec<ResultRow>,
}

impl QueryResult {
    /// Wrap rows produced by a traversal.
    #[must_use]
    pub const fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// The rows, in `seq` order.
    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Consume the result and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<ResultRow> {
        self.rows
    }

    /// The edges carried by the rows.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.rows.iter().filter_map(|row| row.edge.as_ref())
    }

    /// The node each row reaches.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        self.rows.iter().map(|row| row.node).collect()
    }

    /// Sum of the row edge weights.
    ///
    /// For a shortest-path result this is the path weight.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.rows.iter().map(ResultRow::weight).sum()
    }

    /// Whether any row reaches `node`.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.rows.iter().any(|row| row.node == node)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<ResultRow>> for QueryResult {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self::new(rows)
    }
}

impl IntoIterator for QueryResult {
    type Item = ResultRow;
    type IntoIter = std::vec::IntoIter<ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
