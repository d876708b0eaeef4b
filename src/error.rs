//! Error types for graph construction, queries and traversal.
//!
//! Every error is local to the call that produced it: a failed insertion
//! leaves the graph exactly as it was before the call.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors reported by [`Graph`](crate::Graph) operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A required endpoint does not belong to the graph.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },

    /// The queried vertex is not part of the graph.
    #[error("vertex {0} not found")]
    NotFound(VertexId),

    /// A traversal was requested on a graph without vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A per-vertex statistic was requested on a graph without vertices.
    #[error("division by zero: graph has no vertices")]
    DivisionByZero,

    /// A structurally equal vertex is already present.
    #[error("duplicate vertex: structurally equal to existing vertex {existing}")]
    DuplicateVertex {
        /// Handle of the vertex already stored in the graph.
        existing: VertexId,
    },

    /// A graph configuration document could not be parsed.
    #[error("invalid graph configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results carrying a [`GraphError`].
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
