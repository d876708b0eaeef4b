//! Human-readable rendering of graphs.
//!
//! Each vertex renders on its own line as
//! `Vertex = <value>: [<dest>][<weight>]--->[<dest>][<weight>]`.
//! Destinations are shown by value, so rendering needs the owning graph.
//! The value and its edges share one line on purpose, so a rendered graph
//! has exactly one line per vertex and can be diffed or grepped line-wise.

use core::fmt;

use super::edge::Edge;
use super::edge_list::Graph;
use super::vertex::VertexId;

const EDGE_SEPARATOR: &str = "--->";

/// Renders one edge as `[<dest-value>][<weight>]`.
pub struct EdgeDisplay<'a, T> {
    graph: &'a Graph<T>,
    edge: Edge,
}

/// Renders one vertex line.
pub struct VertexDisplay<'a, T> {
    graph: &'a Graph<T>,
    id: VertexId,
}

impl<T> Graph<T> {
    /// Returns a [`Display`](fmt::Display) adapter for `edge`.
    pub fn display_edge(&self, edge: &Edge) -> EdgeDisplay<'_, T> {
        EdgeDisplay { graph: self, edge: *edge }
    }

    /// Returns a [`Display`](fmt::Display) adapter for the vertex `id`.
    pub fn display_vertex(&self, id: VertexId) -> VertexDisplay<'_, T> {
        VertexDisplay { graph: self, id }
    }
}

impl<T: fmt::Display> fmt::Display for EdgeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.edge.target();
        match self.graph.value(target) {
            Some(value) => write!(f, "[{value}][{}]", self.edge.weight()),
            None => write!(f, "[{target}][{}]", self.edge.weight()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for VertexDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(vertex) = self.graph.vertex(self.id) else {
            return write!(f, "Vertex {} (missing)", self.id);
        };
        write!(f, "Vertex = {}:", vertex.value())?;
        for (i, edge) in vertex.edges().iter().enumerate() {
            f.write_str(if i == 0 { " " } else { EDGE_SEPARATOR })?;
            write!(f, "{}", self.graph.display_edge(edge))?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, _) in self.vertices() {
            writeln!(f, "{}", self.display_vertex(id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Edge, Graph, GraphMode, Vertex, VertexId};

    #[test]
    fn test_render_sample() {
        let mut graph = Graph::new();
        let ids: Vec<_> = ["0", "1", "2", "3"]
            .into_iter()
            .map(|v| graph.add_vertex(Vertex::new(v)).unwrap())
            .collect();
        for (to, from, w) in [(0, 1, 2), (1, 2, 3), (2, 0, 1), (2, 3, 1), (3, 2, 4)] {
            graph.add_edge(ids[to], ids[from], w).unwrap();
        }

        let expected = "\
Vertex = 0: [1][2]--->[2][1]
Vertex = 1: [0][2]--->[2][3]
Vertex = 2: [1][3]--->[0][1]--->[3][1]--->[3][4]
Vertex = 3: [2][1]--->[2][4]
";
        assert_eq!(graph.to_string(), expected);
    }

    #[test]
    fn test_render_isolated_and_missing() {
        let mut graph = Graph::with_mode(GraphMode::DIRECTED);
        let a = graph.add_vertex(Vertex::new(7)).unwrap();
        assert_eq!(graph.display_vertex(a).to_string(), "Vertex = 7:");
        assert_eq!(graph.display_vertex(VertexId::new(3)).to_string(), "Vertex #3 (missing)");
        assert_eq!(graph.display_edge(&Edge::weighted(VertexId::new(5), 2)).to_string(), "[#5][2]");
    }
}
