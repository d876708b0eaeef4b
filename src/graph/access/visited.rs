//! Traversal-scoped visited flags.
//!
//! Visited state lives in the traversal rather than in the vertices, so a
//! traversal only needs `&Graph` and two traversals never observe each
//! other's marks.

use crate::graph::VertexId;

/// One flag per vertex of a fixed-size arena.
#[derive(Debug, Clone)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
    marked: usize,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            marked: 0,
        }
    }

    /// Number of vertices marked so far.
    #[inline]
    pub(crate) fn marked(&self) -> usize {
        self.marked
    }

    #[inline]
    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        self.flags.get(id.index()).copied().unwrap_or(false)
    }

    /// Returns `true` iff `id` was not yet visited, and marks it.
    ///
    /// Out-of-range handles are never visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, id: VertexId) -> bool {
        match self.flags.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.marked += 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_marks_once() {
        let mut visited = VisitedFlags::new(3);
        assert!(visited.try_visit(VertexId::new(1)));
        assert!(!visited.try_visit(VertexId::new(1)));
        assert!(visited.is_visited(VertexId::new(1)));
        assert!(!visited.is_visited(VertexId::new(0)));
        assert_eq!(visited.marked(), 1);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut visited = VisitedFlags::new(1);
        assert!(!visited.try_visit(VertexId::new(5)));
        assert!(!visited.is_visited(VertexId::new(5)));
        assert_eq!(visited.marked(), 0);
    }
}
