//! Vertices and their handles.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::edge::{Edge, Weight};

/// A stable handle to a vertex in a [`Graph`](crate::Graph)'s arena.
///
/// Handles are dense indices assigned in insertion order. They identify a
/// vertex independently of its value or edges, so adding edges never changes a
/// vertex's identity.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw arena index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value-bearing vertex owning its outgoing edges in insertion order.
///
/// # Structural comparison
/// Two vertices are equal iff their values are equal, their edge lists have
/// the same length, and the edge weights match position by position.
/// Ordering compares values first, then edge-list length (more edges compares
/// greater), then weights in list order. Edge order therefore matters for
/// both equality and hashing.
///
/// Cloning copies the edge list entry by entry; the copied edges reference the
/// same endpoint handles as the originals.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    value: T,
    edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    /// Creates a vertex with an empty edge list.
    pub fn new(value: T) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    /// Creates a vertex that already owns `edges`.
    pub fn with_edges(value: T, edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            value,
            edges: edges.into_iter().collect(),
        }
    }

    /// The vertex value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of entries in the edge list.
    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Appends an edge. Duplicates are allowed.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns true if any edge leads to `other`.
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.edges.iter().any(|e| e.target() == other)
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// Consumes the vertex, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.edges.iter().map(Edge::weight)
    }
}

impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.edges.len() == other.edges.len()
            && self.weights().eq(other.weights())
    }
}

impl<T: Eq> Eq for Vertex<T> {}

impl<T: Hash> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.edges.len().hash(state);
        for weight in self.weights() {
            weight.hash(state);
        }
    }
}

impl<T: PartialOrd> PartialOrd for Vertex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.partial_cmp(&other.value)? {
            Ordering::Equal => Some(self.cmp_edges_positional(other)),
            ord => Some(ord),
        }
    }
}

impl<T: Ord> Ord for Vertex<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.cmp_edges_positional(other))
    }
}

impl<T> Vertex<T> {
    fn cmp_edges_positional(&self, other: &Self) -> Ordering {
        self.edges
            .len()
            .cmp(&other.edges.len())
            .then_with(|| self.weights().cmp(other.weights()))
    }
}
