//! # `ugraph` - Arena-Backed Edge-List Graphs
//!
//! An in-memory graph for undirected and directed graphs with integer edge
//! weights and self-loops. Vertices carry a value and own their outgoing edges;
//! edges refer to vertices through stable handles into a central arena.
//!
//! ## Guarantees
//!
//! ### Identity
//! - **Stable handles**: a [`VertexId`] is assigned once and never changes, no
//!   matter how many edges the vertex gains.
//! - **No ownership cycles**: mutually adjacent vertices reference each other by
//!   handle, never by ownership.
//!
//! ### Structure
//! - **Mirrored edges**: in undirected mode `add_edge(u, v, w)` appends `u -> v`
//!   to `u` and `v -> u` to `v`; a self-loop is stored exactly once.
//! - **Logical edge count**: each accepted `add_edge` counts as one edge.
//! - **Structural comparison**: vertices compare by value, then edge count,
//!   then edge weights in insertion order.
//!
//! ### Errors
//! - Every failure is a [`GraphError`] returned to the caller and leaves the
//!   graph untouched. Nothing is printed; diagnostics go through `tracing`.
//!
//! ## Concurrency
//!
//! The graph has no internal synchronization. Mutation requires `&mut Graph`,
//! so sharing a graph between threads that mutate it needs an external lock.
//!
//! ## Example
//!
//! ```rust
//! use ugraph::{Graph, Vertex};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(Vertex::new("a")).unwrap();
//! let b = graph.add_vertex(Vertex::new("b")).unwrap();
//! graph.add_edge(a, b, 3).unwrap();
//! graph.add_edge(b, b, 1).unwrap();
//!
//! assert!(graph.is_adjacent(b, a));
//! assert_eq!(graph.degree(b), 2);
//! assert_eq!(graph.count_self_loops(), 1);
//! assert_eq!(graph.depth_first_search().unwrap(), vec![a, b]);
//! assert_eq!(graph.to_string(), "Vertex = a: [b][3]\nVertex = b: [a][3]--->[b][1]\n");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    Dfs, Directedness, Edge, Graph, GraphConfig, GraphMode, Vertex, VertexId, Weight, Weighting,
};

// Handles stay as small as the index they wrap.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
};
