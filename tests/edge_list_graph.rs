use std::cmp::Ordering;

use ugraph::{Edge, Graph, GraphError, GraphMode, Vertex, VertexId};

const SAMPLE_EDGES: [(usize, usize, i32); 5] = [(0, 1, 2), (1, 2, 3), (2, 0, 1), (2, 3, 1), (3, 2, 4)];

fn sample(mode: GraphMode) -> (Graph<String>, Vec<VertexId>) {
    let mut graph = Graph::with_mode(mode);
    let ids: Vec<_> = (0..4)
        .map(|v| graph.add_vertex(Vertex::new(v.to_string())).unwrap())
        .collect();
    for (to, from, w) in SAMPLE_EDGES {
        graph.add_edge(ids[to], ids[from], w).unwrap();
    }
    (graph, ids)
}

fn adjacency(graph: &Graph<String>, id: VertexId) -> Vec<(String, i32)> {
    graph
        .adjacent_edges(id)
        .unwrap()
        .iter()
        .map(|e| (graph.value(e.target()).unwrap().clone(), e.weight()))
        .collect()
}

fn pairs(items: &[(&str, i32)]) -> Vec<(String, i32)> {
    items.iter().map(|&(v, w)| (v.to_string(), w)).collect()
}

#[test]
fn test_sample_graph_undirected_adjacency_lists() {
    let (graph, ids) = sample(GraphMode::UNDIRECTED);

    assert_eq!(adjacency(&graph, ids[0]), pairs(&[("1", 2), ("2", 1)]));
    assert_eq!(adjacency(&graph, ids[1]), pairs(&[("0", 2), ("2", 3)]));
    assert_eq!(
        adjacency(&graph, ids[2]),
        pairs(&[("1", 3), ("0", 1), ("3", 1), ("3", 4)])
    );
    assert_eq!(adjacency(&graph, ids[3]), pairs(&[("2", 1), ("2", 4)]));

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.degree(ids[2]), 4);
    assert_eq!(graph.maximum_degree(), 4);
    assert_eq!(graph.average_degree().unwrap(), 2);
    assert_eq!(graph.count_self_loops(), 0);

    let order: Vec<_> = graph.depth_first_search().unwrap().iter().map(|id| id.index()).collect();
    assert_eq!(order, vec![0, 2, 3, 1]);
}

#[test]
fn test_sample_graph_directed_adjacency_lists() {
    let (graph, ids) = sample(GraphMode::DIRECTED);

    assert_eq!(adjacency(&graph, ids[0]), pairs(&[("1", 2)]));
    assert_eq!(adjacency(&graph, ids[1]), pairs(&[("2", 3)]));
    assert_eq!(adjacency(&graph, ids[2]), pairs(&[("0", 1), ("3", 1)]));
    assert_eq!(adjacency(&graph, ids[3]), pairs(&[("2", 4)]));

    assert_eq!(graph.degree(ids[2]), 2);
    assert_eq!(graph.average_degree().unwrap(), 2);

    let order: Vec<_> = graph.depth_first_search().unwrap().iter().map(|id| id.index()).collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_deep_copy_renders_identically_and_is_independent() {
    let (graph, ids) = sample(GraphMode::UNDIRECTED);
    let mut copy = graph.clone();
    assert_eq!(copy.to_string(), graph.to_string());

    // Copied edges point at the copy's own vertices.
    for (id, vertex) in copy.vertices() {
        for edge in vertex.edges() {
            assert_eq!(edge.source(), Some(id));
            assert!(copy.contains(edge.target()));
        }
    }

    copy.add_vertex(Vertex::new("4".to_string())).unwrap();
    copy.add_edge(ids[1], ids[1], 9).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.count_self_loops(), 0);
    assert_eq!(copy.vertex_count(), 5);
    assert_eq!(copy.count_self_loops(), 1);
    assert_ne!(copy.to_string(), graph.to_string());
}

#[test]
fn test_self_loop_accounting() {
    let mut graph = Graph::new();
    let u = graph.add_vertex(Vertex::new(1)).unwrap();
    let v = graph.add_vertex(Vertex::new(2)).unwrap();

    let (degree_before, edges_before) = (graph.degree(u), graph.edge_count());
    graph.add_edge(u, u, 5).unwrap();
    assert_eq!(graph.degree(u), degree_before + 1);
    assert_eq!(graph.edge_count(), edges_before + 1);

    graph.add_edge(u, v, 1).unwrap();
    graph.add_edge(v, v, 2).unwrap();
    assert_eq!(graph.count_self_loops(), 2);
    assert_eq!(graph.average_degree().unwrap(), 3);
}

#[test]
fn test_vertex_ordering_contract() {
    let (a, hub, b) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
    let mut graph = Graph::with_vertices(
        GraphMode::DIRECTED,
        [
            Vertex::new(5),
            Vertex::with_edges(5, [Edge::weighted(a, 1)]),
            Vertex::with_edges(5, [Edge::weighted(a, 2)]),
        ],
    )
    .unwrap();

    assert_eq!(graph.cmp_vertices(hub, a), Some(Ordering::Greater));
    assert_eq!(graph.cmp_vertices(hub, b), Some(Ordering::Less));

    graph.add_edge(a, hub, 0).unwrap();
    graph.add_edge(a, b, 0).unwrap();
    // `a` now has two edges, more than either other vertex.
    assert_eq!(graph.cmp_vertices(a, hub), Some(Ordering::Greater));
}

#[test]
fn test_errors_leave_graph_untouched() {
    let (mut graph, ids) = sample(GraphMode::UNDIRECTED);
    let lone = graph.add_vertex(Vertex::new("9".to_string())).unwrap();
    let before = graph.to_string();

    let err = graph.add_edge(ids[0], VertexId::new(10), 1).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert!(err.to_string().starts_with("invalid argument"));

    assert!(matches!(
        graph.add_vertex(Vertex::new("9".to_string())),
        Err(GraphError::DuplicateVertex { existing }) if existing == lone
    ));

    // A copy of a connected vertex carries edges and must be rebuilt, not re-added.
    let clone_of_three = graph.vertex(ids[3]).unwrap().clone();
    assert_eq!(graph.find(&clone_of_three), Some(ids[3]));
    assert!(matches!(
        graph.add_vertex(clone_of_three),
        Err(GraphError::InvalidArgument { .. })
    ));

    assert_eq!(graph.to_string(), before);
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_bulk_construction_matches_incremental() {
    let id = VertexId::new;
    let vertices = (0..4).map(|v| Vertex::new(v.to_string()));
    let edges = SAMPLE_EDGES.map(|(to, from, w)| Edge::between(id(to), id(from), w));

    let bulk = Graph::from_parts(GraphMode::UNDIRECTED, vertices, edges).unwrap();
    let (incremental, _) = sample(GraphMode::UNDIRECTED);

    assert_eq!(bulk.to_string(), incremental.to_string());
    assert_eq!(bulk.edges(), incremental.edges());
    assert_eq!(bulk.edge_count(), incremental.edge_count());
}
