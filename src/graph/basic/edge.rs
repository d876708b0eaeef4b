//! Edges stored in a vertex's edge list.
//!
//! An edge never owns its endpoints. It holds [`VertexId`] handles into the
//! owning graph's vertex arena, so mutually adjacent vertices form no
//! ownership cycle.

use core::cmp::Ordering;

use super::vertex::VertexId;

/// Integer edge weight. Unweighted edges carry `0`.
pub type Weight = i32;

/// A weighted edge referencing its destination (and optionally its source).
///
/// Equality and hashing are identity-based: two edges are equal iff their
/// weights match and they reference the same endpoint handles. `Ord` sorts by
/// weight, then destination handle, then source handle; use
/// [`Graph::cmp_edges`](crate::Graph::cmp_edges) to order destinations by
/// their vertices' structure instead.
///
/// `Edge` is `Copy`: a copy shares the endpoint handles of the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Option<VertexId>,
    target: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an unweighted edge to `to` with no recorded source.
    #[inline]
    pub const fn new(to: VertexId) -> Self {
        Self::weighted(to, 0)
    }

    /// Creates an edge to `to` carrying `weight`, with no recorded source.
    #[inline]
    pub const fn weighted(to: VertexId, weight: Weight) -> Self {
        Self {
            source: None,
            target: to,
            weight,
        }
    }

    /// Creates an edge `from -> to` carrying `weight`.
    #[inline]
    pub const fn between(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self {
            source: Some(from),
            target: to,
            weight,
        }
    }

    /// The source vertex, if recorded.
    #[inline]
    pub const fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// The destination vertex.
    #[inline]
    pub const fn target(&self) -> VertexId {
        self.target
    }

    /// The edge weight.
    #[inline]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the reverse edge `to -> from` with the same weight.
    ///
    /// Returns `None` if the source is not recorded.
    pub fn reversed(&self) -> Option<Self> {
        self.source
            .map(|source| Self::between(self.target, source, self.weight))
    }

    /// Returns true if the edge starts and ends at `owner`.
    #[inline]
    pub fn is_self_loop_of(&self, owner: VertexId) -> bool {
        self.target == owner
    }

    pub(crate) const fn with_source(self, source: VertexId) -> Self {
        Self {
            source: Some(source),
            target: self.target,
            weight: self.weight,
        }
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.source.cmp(&other.source))
    }
}
