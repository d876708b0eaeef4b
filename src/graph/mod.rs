//! Graph data model, construction and traversal.
//!
//! Graph implementations are organized into categories:
//! - `basic`: vertices, edges, the edge-list graph and its traversals
//! - `config`: graph modes and construction-time configuration

pub mod basic;
pub mod config;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{Dfs, Edge, EdgeDisplay, Graph, Vertex, VertexDisplay, VertexId, Weight};
pub use config::{Directedness, GraphConfig, GraphMode, Weighting};
