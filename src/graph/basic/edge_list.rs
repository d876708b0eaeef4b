//! An edge-list graph backed by a vertex arena.
//!
//! Vertices live in a dense `Vec` and are addressed by [`VertexId`]. Each
//! vertex owns its outgoing edges; a separate global list records every
//! adjacency entry in the order it was created.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(n)\) | Scans for a structurally equal vertex |
//! | `add_edge` | \(O(1)\) amortized | Appends to one or two edge lists |
//! | `degree` | \(O(1)\) | Edge-list length |
//! | `find` | \(O(n)\) | Structural scan |
//! | `maximum_degree` | \(O(n)\) | |
//! | `count_self_loops` | \(O(n + m)\) | |

use core::cmp::Ordering;

use tracing::{debug, warn};

use super::edge::{Edge, Weight};
use super::vertex::{Vertex, VertexId};
use crate::error::{GraphError, Result};
use crate::graph::config::{GraphConfig, GraphMode};

/// A directed or undirected graph with integer edge weights and self-loops.
///
/// Undirected graphs mirror every edge into both endpoints' lists, except
/// self-loops, which are stored once. The logical edge count grows by exactly
/// one per accepted edge, whatever the number of list entries created.
///
/// Cloning a graph produces fresh vertices whose edges point at the clone's
/// own vertices: handles are arena indices, so they are valid in both graphs
/// and the two never share mutable state.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    mode: GraphMode,
    vertices: Vec<Vertex<T>>,
    /// Every adjacency entry, in creation order.
    edges: Vec<Edge>,
    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::with_mode(GraphMode::default())
    }
}

impl<T> Graph<T> {
    /// Creates an empty undirected, unweighted graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph in `mode`.
    pub fn with_mode(mode: GraphMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
            edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph from a [`GraphConfig`].
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            mode: config.mode,
            vertices: Vec::with_capacity(config.vertex_capacity),
            edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// The graph's mode.
    #[inline]
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges (one per accepted `add_edge`).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if `id` refers to a vertex of this graph.
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// The vertex behind `id`.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// The value of the vertex behind `id`.
    #[inline]
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::value)
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex<T>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Every adjacency entry in creation order.
    ///
    /// In undirected mode this holds both directions of each non-loop edge.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The handle of the first inserted vertex.
    #[inline]
    pub fn first_vertex(&self) -> Option<VertexId> {
        (!self.vertices.is_empty()).then(|| VertexId::new(0))
    }

    /// Adds an edge between `to` and `from`.
    ///
    /// The entry stored in `to`'s list points at `from`. In undirected mode the
    /// reciprocal entry is appended to `from`'s list unless `to == from`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if either handle is not part of
    /// the graph. The graph is left untouched.
    pub fn add_edge(&mut self, to: VertexId, from: VertexId, weight: Weight) -> Result<()> {
        self.ensure_endpoint("to", to)?;
        self.ensure_endpoint("from", from)?;

        self.push_entry(to, Edge::between(to, from, weight));
        if !self.mode.is_directed() && to != from {
            self.push_entry(from, Edge::between(from, to, weight));
        }
        self.edge_count += 1;

        debug!(to = to.index(), from = from.index(), weight, "added edge");
        Ok(())
    }

    /// Adds an edge with weight `0`.
    ///
    /// # Errors
    /// Same as [`Graph::add_edge`].
    pub fn add_unweighted_edge(&mut self, to: VertexId, from: VertexId) -> Result<()> {
        self.add_edge(to, from, 0)
    }

    /// Returns true if `u`'s edge list contains an edge to `v`.
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.vertex(u).is_some_and(|vertex| vertex.is_adjacent(v))
    }

    /// The edge list of `id`, or `None` if the vertex does not exist.
    pub fn adjacent_edges(&self, id: VertexId) -> Option<&[Edge]> {
        self.vertex(id).map(Vertex::edges)
    }

    /// The edge-list length of `id`.
    ///
    /// Returns `0` for a vertex that does not exist, which is
    /// indistinguishable from an isolated vertex. Use
    /// [`Graph::adjacent_edges`] when the difference matters.
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, Vertex::degree)
    }

    /// The largest edge-list length, or `0` for an empty graph.
    pub fn maximum_degree(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).max().unwrap_or(0)
    }

    /// Number of edges that start and end at the same vertex.
    ///
    /// Self-loops occupy a single list entry in every mode, so each one is
    /// counted exactly once.
    pub fn count_self_loops(&self) -> usize {
        self.vertices()
            .map(|(id, vertex)| {
                vertex
                    .edges()
                    .iter()
                    .filter(|edge| edge.is_self_loop_of(id))
                    .count()
            })
            .sum()
    }

    /// `(2 * edge_count) / vertex_count`, rounded down.
    ///
    /// # Errors
    /// Returns [`GraphError::DivisionByZero`] on a graph without vertices.
    pub fn average_degree(&self) -> Result<usize> {
        (2 * self.edge_count)
            .checked_div(self.vertices.len())
            .ok_or(GraphError::DivisionByZero)
    }

    fn ensure_endpoint(&self, role: &str, id: VertexId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::invalid_argument(format!(
                "'{role}' vertex {id} is not part of the graph ({} vertices)",
                self.vertices.len()
            )))
        }
    }

    fn push_entry(&mut self, owner: VertexId, edge: Edge) {
        self.vertices[owner.index()].add_edge(edge);
        self.edges.push(edge);
    }
}

impl<T: PartialEq> Graph<T> {
    /// Adds an edge-free vertex and returns its handle.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if the vertex already carries edges;
    ///   such vertices go through [`Graph::with_vertices`] or
    ///   [`Graph::from_parts`], which validate and register them.
    /// - [`GraphError::DuplicateVertex`] if a structurally equal vertex is
    ///   already present.
    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> Result<VertexId> {
        if vertex.degree() > 0 {
            return Err(GraphError::invalid_argument(format!(
                "vertex carries {} edges; build it with Graph::with_vertices or Graph::from_parts",
                vertex.degree()
            )));
        }
        self.insert_vertex(vertex)
    }

    fn insert_vertex(&mut self, vertex: Vertex<T>) -> Result<VertexId> {
        if let Some(existing) = self.find(&vertex) {
            return Err(GraphError::DuplicateVertex { existing });
        }
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(vertex);
        debug!(vertex = id.index(), "added vertex");
        Ok(id)
    }

    /// Finds the first vertex structurally equal to `vertex`.
    pub fn find(&self, vertex: &Vertex<T>) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v == vertex)
            .map(VertexId::new)
    }

    /// Finds the first vertex holding `value`.
    pub fn find_value(&self, value: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.value() == value)
            .map(VertexId::new)
    }

    /// Builds a graph from vertices that may already own edges.
    ///
    /// Vertices receive handles `0..n` in iteration order, and their edges
    /// must target those handles. Each pre-existing edge counts as one edge
    /// and is registered in the global edge list.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateVertex`] if two vertices are structurally equal.
    /// - [`GraphError::InvalidArgument`] if an edge targets a handle outside
    ///   `0..n`.
    pub fn with_vertices(
        mode: GraphMode,
        vertices: impl IntoIterator<Item = Vertex<T>>,
    ) -> Result<Self> {
        let mut graph = Self::with_mode(mode);
        for vertex in vertices {
            graph.insert_vertex(vertex)?;
        }

        let n = graph.vertices.len();
        for (index, vertex) in graph.vertices.iter_mut().enumerate() {
            let owner = VertexId::new(index);
            for edge in vertex.edges_mut() {
                if edge.target().index() >= n {
                    return Err(GraphError::invalid_argument(format!(
                        "edge from {owner} targets {}, outside the {n} supplied vertices",
                        edge.target()
                    )));
                }
                *edge = edge.with_source(owner);
            }
            graph.edges.extend_from_slice(vertex.edges());
            graph.edge_count += vertex.degree();
        }
        Ok(graph)
    }

    /// Builds a graph from vertices and a separate edge collection.
    ///
    /// Vertices are inserted as with [`Graph::with_vertices`]. Each edge must
    /// record its source (see [`Edge::between`]); an edge whose source is
    /// missing, or whose source or target is not one of the inserted
    /// vertices, is skipped. Accepted edges are appended to the source's list
    /// and, in undirected mode, mirrored into the target's list unless they
    /// are self-loops.
    ///
    /// # Errors
    /// Propagates the errors of [`Graph::with_vertices`].
    pub fn from_parts(
        mode: GraphMode,
        vertices: impl IntoIterator<Item = Vertex<T>>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        let mut graph = Self::with_vertices(mode, vertices)?;
        let mut skipped = 0usize;
        for edge in edges {
            match edge.source() {
                Some(source) if graph.contains(source) && graph.contains(edge.target()) => {
                    graph.add_edge(source, edge.target(), edge.weight())?;
                }
                source => {
                    skipped += 1;
                    warn!(
                        source = ?source.map(VertexId::index),
                        target = edge.target().index(),
                        "skipping edge with an endpoint outside the vertex set"
                    );
                }
            }
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            skipped,
            "built graph from parts"
        );
        Ok(graph)
    }
}

impl<T: Ord> Graph<T> {
    /// Compares two vertices structurally (value, edge count, weights).
    ///
    /// Returns `None` if either handle is not part of the graph.
    pub fn cmp_vertices(&self, a: VertexId, b: VertexId) -> Option<Ordering> {
        Some(self.vertex(a)?.cmp(self.vertex(b)?))
    }

    /// Orders edges by weight, then by the structure of their destinations,
    /// then by the structure of their sources.
    ///
    /// Handles that are not part of the graph fall back to handle order.
    pub fn cmp_edges(&self, a: &Edge, b: &Edge) -> Ordering {
        let by_handle = |x: VertexId, y: VertexId| self.cmp_vertices(x, y).unwrap_or_else(|| x.cmp(&y));
        a.weight()
            .cmp(&b.weight())
            .then_with(|| by_handle(a.target(), b.target()))
            .then_with(|| match (a.source(), b.source()) {
                (Some(x), Some(y)) => by_handle(x, y),
                (x, y) => x.cmp(&y),
            })
    }
}
