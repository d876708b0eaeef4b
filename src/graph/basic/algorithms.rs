//! Depth-first traversal for [`Graph`].
//!
//! The traversal keeps an explicit stack and traversal-scoped visited flags.
//! Every destination of a visited vertex is pushed, including ones that are
//! already visited or already scheduled; duplicates are dropped when popped.
//! This trades stack growth for a simpler loop.

use tracing::{debug, trace};

use super::edge_list::Graph;
use super::vertex::VertexId;
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;

/// An iterator for Depth-First Search (DFS).
///
/// This iterator yields vertex handles in DFS order. A vertex's neighbors are
/// pushed in edge-list order, so the most recently added edge is followed
/// first. The order is deterministic for a fixed graph and start vertex.
pub struct Dfs<'a, T> {
    graph: &'a Graph<T>,
    visited: VisitedFlags,
    stack: Vec<VertexId>,
}

impl<'a, T> Dfs<'a, T> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// An unknown `start` yields nothing.
    pub fn new(graph: &'a Graph<T>, start: VertexId) -> Self {
        let mut stack = Vec::new();
        if graph.contains(start) {
            stack.push(start);
        }
        Self {
            graph,
            visited: VisitedFlags::new(graph.vertex_count()),
            stack,
        }
    }

    /// Returns true if `id` has been yielded already.
    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.is_visited(id)
    }

    /// Number of vertices yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.marked()
    }
}

impl<'a, T> Iterator for Dfs<'a, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if !self.visited.try_visit(u) {
                continue;
            }

            if let Some(edges) = self.graph.adjacent_edges(u) {
                self.stack.extend(edges.iter().map(|e| e.target()));
            }
            trace!(vertex = u.index(), pending = self.stack.len(), "visited");
            return Some(u);
        }
    }
}

impl<T> Graph<T> {
    /// Returns a lazy depth-first traversal starting at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if `start` is not part of the graph.
    pub fn dfs(&self, start: VertexId) -> Result<Dfs<'_, T>> {
        if !self.contains(start) {
            return Err(GraphError::NotFound(start));
        }
        Ok(Dfs::new(self, start))
    }

    /// Visits the graph depth-first from the first inserted vertex.
    ///
    /// Vertices unreachable from the first vertex are not visited.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn depth_first_search(&self) -> Result<Vec<VertexId>> {
        let start = self.first_vertex().ok_or(GraphError::EmptyGraph)?;
        debug!(start = start.index(), vertices = self.vertex_count(), "depth-first search");
        Ok(Dfs::new(self, start).collect())
    }

    /// Like [`Graph::depth_first_search`], yielding vertex values.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn depth_first_values(&self) -> Result<Vec<&T>> {
        Ok(self
            .depth_first_search()?
            .into_iter()
            .filter_map(|id| self.value(id))
            .collect())
    }
}
