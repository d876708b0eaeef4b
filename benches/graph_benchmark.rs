use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ugraph::{Graph, GraphMode, Vertex, VertexId};

fn chain(size: usize, mode: GraphMode) -> Graph<usize> {
    let mut graph = Graph::with_mode(mode);
    let ids: Vec<_> = (0..size)
        .map(|i| graph.add_vertex(Vertex::new(i)).unwrap())
        .collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1], 1).unwrap();
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("edge_list_build_undirected_chain", |b| {
        b.iter(|| black_box(chain(size, GraphMode::UNDIRECTED)));
    });

    c.bench_function("edge_list_build_directed_chain", |b| {
        b.iter(|| black_box(chain(size, GraphMode::DIRECTED)));
    });
}

fn bench_graph_queries(c: &mut Criterion) {
    let size = 1000;
    let mut graph = chain(size, GraphMode::UNDIRECTED);
    // Tree-like fan-out on top of the chain.
    for i in 1..size {
        graph
            .add_edge(VertexId::new(i), VertexId::new(i / 2), 2)
            .unwrap();
    }

    c.bench_function("edge_list_maximum_degree", |b| {
        b.iter(|| black_box(graph.maximum_degree()));
    });

    c.bench_function("edge_list_count_self_loops", |b| {
        b.iter(|| black_box(graph.count_self_loops()));
    });

    c.bench_function("edge_list_find_last", |b| {
        let last = graph.vertex(VertexId::new(size - 1)).unwrap().clone();
        b.iter(|| black_box(graph.find(&last)));
    });
}

fn bench_graph_dfs(c: &mut Criterion) {
    let size = 1000;
    let graph = chain(size, GraphMode::UNDIRECTED);

    c.bench_function("edge_list_dfs", |b| {
        b.iter(|| black_box(graph.depth_first_search().unwrap()));
    });

    c.bench_function("edge_list_dfs_lazy_first_100", |b| {
        b.iter(|| black_box(graph.dfs(VertexId::new(0)).unwrap().take(100).count()));
    });
}

criterion_group!(benches, bench_graph_build, bench_graph_queries, bench_graph_dfs);
criterion_main!(benches);
