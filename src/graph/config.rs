//! Graph modes and construction-time configuration.
//!
//! A single [`Graph`](crate::Graph) type covers every representation; the
//! [`GraphMode`] decides whether `add_edge` mirrors edges into the other
//! endpoint's list.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether edges are one-way or mirrored into both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directedness {
    /// Edge `u -> v` is stored only in `u`'s list.
    Directed,
    /// Edge `u -> v` is stored in `u`'s list and mirrored as `v -> u`.
    #[default]
    Undirected,
}

/// Whether edge weights carry meaning.
///
/// Weights are stored as given in both modes. The flag describes the graph to
/// callers; [`Graph::add_unweighted_edge`](crate::Graph::add_unweighted_edge)
/// always records weight `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Edge weights are significant.
    Weighted,
    /// Edge weights are informational only.
    #[default]
    Unweighted,
}

/// The mode of a graph: directedness × weighting.
///
/// Defaults to undirected and unweighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphMode {
    /// Directed or undirected storage.
    pub directedness: Directedness,
    /// Weighted or unweighted edges.
    pub weighting: Weighting,
}

impl GraphMode {
    /// Undirected, unweighted.
    pub const UNDIRECTED: Self = Self {
        directedness: Directedness::Undirected,
        weighting: Weighting::Unweighted,
    };

    /// Directed, unweighted.
    pub const DIRECTED: Self = Self {
        directedness: Directedness::Directed,
        weighting: Weighting::Unweighted,
    };

    /// Returns the same mode with weighted edges.
    pub const fn weighted(self) -> Self {
        Self {
            directedness: self.directedness,
            weighting: Weighting::Weighted,
        }
    }

    /// Returns true if edges are stored one-way.
    #[inline]
    pub const fn is_directed(self) -> bool {
        matches!(self.directedness, Directedness::Directed)
    }

    /// Returns true if edge weights carry meaning.
    #[inline]
    pub const fn is_weighted(self) -> bool {
        matches!(self.weighting, Weighting::Weighted)
    }
}

/// Construction-time configuration for a [`Graph`](crate::Graph).
///
/// ```
/// use ugraph::GraphConfig;
///
/// let config = GraphConfig::from_json(r#"{ "mode": { "directedness": "directed" } }"#).unwrap();
/// assert!(config.mode.is_directed());
/// assert!(!config.mode.is_weighted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Mode of the graph.
    pub mode: GraphMode,
    /// Number of vertices to reserve room for up front.
    pub vertex_capacity: usize,
}

impl GraphConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`GraphError::Config`](crate::GraphError::Config) if the document
    /// is not valid JSON or has fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates serialization failures as
    /// [`GraphError::Config`](crate::GraphError::Config).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
