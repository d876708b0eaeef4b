//! Basic graph implementations.
//!
//! This module contains the vertex/edge data model, the arena-backed
//! edge-list graph, its rendering, and depth-first traversal.

pub mod algorithms;
pub mod edge;
pub mod edge_list;
pub mod render;
pub mod vertex;

pub use algorithms::Dfs;
pub use edge::{Edge, Weight};
pub use edge_list::Graph;
pub use render::{EdgeDisplay, VertexDisplay};
pub use vertex::{Vertex, VertexId};
