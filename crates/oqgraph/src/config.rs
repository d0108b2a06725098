//! Graph configuration and builder.

use oqgraph_core::{validate_weight, DEFAULT_WEIGHT};
use oqgraph_graph::traversal::TraversalLimits;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Configuration for a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Weight given to edges created without an explicit weight.
    /// Default: 1.0
    pub default_weight: f64,

    /// Maximum number of nodes a single multi-hop query may settle.
    /// If `None`, traversals are unbounded.
    /// Default: None
    pub max_visited_nodes: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { default_weight: DEFAULT_WEIGHT, max_visited_nodes: None }
    }
}

impl GraphConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default edge weight.
    #[must_use]
    pub const fn default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Set the traversal visit limit.
    #[must_use]
    pub const fn max_visited_nodes(mut self, max: Option<usize>) -> Self {
        self.max_visited_nodes = max;
        self
    }

    /// Check that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid default weight or a zero
    /// visit limit.
    pub fn validate(&self) -> Result<()> {
        validate_weight(self.default_weight)
            .map_err(|err| Error::Config(format!("default_weight: {err}")))?;
        if self.max_visited_nodes == Some(0) {
            return Err(Error::Config("max_visited_nodes must be at least 1".to_owned()));
        }
        Ok(())
    }

    pub(crate) const fn traversal_limits(&self) -> TraversalLimits {
        TraversalLimits { max_visited_nodes: self.max_visited_nodes }
    }
}

/// Builder for a configured [`Graph`].
///
/// # Example
///
/// ```
/// use oqgraph::GraphBuilder;
///
/// let graph = GraphBuilder::new().default_weight(2.0).max_visited_nodes(10_000).build()?;
/// assert_eq!(graph.config().default_weight, 2.0);
/// # Ok::<(), oqgraph::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight given to edges created without an explicit weight.
    #[must_use]
    pub const fn default_weight(mut self, weight: f64) -> Self {
        self.config.default_weight = weight;
        self
    }

    /// Cap the nodes a single traversal may reach.
    #[must_use]
    pub const fn max_visited_nodes(mut self, max: usize) -> Self {
        self.config.max_visited_nodes = Some(max);
        self
    }

    /// Validate the configuration and create the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn build(self) -> Result<Graph> {
        self.config.validate()?;
        Ok(Graph::with_config(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.default_weight, 1.0);
        assert_eq!(config.max_visited_nodes, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_rejects_invalid_weight() {
        for weight in [-0.5, f64::NAN, f64::INFINITY] {
            let result = GraphBuilder::new().default_weight(weight).build();
            assert!(matches!(result, Err(Error::Config(_))));
        }
    }

    #[test]
    fn builder_rejects_zero_visit_limit() {
        let result = GraphBuilder::new().max_visited_nodes(0).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn limits_follow_config() {
        let config = GraphConfig::new().max_visited_nodes(Some(5));
        assert_eq!(config.traversal_limits().max_visited_nodes, Some(5));
    }
}
