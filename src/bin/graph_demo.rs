use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ugraph::{Graph, GraphConfig, GraphMode, Vertex};

#[derive(Parser)]
#[command(name = "graph_demo")]
#[command(about = "Builds the sample graph and prints it", long_about = None)]
struct Cli {
    /// Store edges one-way instead of mirroring them
    #[arg(long, default_value_t = false)]
    directed: bool,

    /// JSON graph configuration (overrides --directed)
    #[arg(long)]
    config: Option<PathBuf>,
}

const SAMPLE_EDGES: [(usize, usize, i32); 5] = [(0, 1, 2), (1, 2, 3), (2, 0, 1), (2, 3, 1), (3, 2, 4)];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GraphConfig::from_json(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => GraphConfig {
            mode: if cli.directed { GraphMode::DIRECTED } else { GraphMode::UNDIRECTED },
            ..GraphConfig::default()
        },
    };

    let mut graph = Graph::with_config(&config);
    let ids = ["0", "1", "2", "3"]
        .into_iter()
        .map(|value| graph.add_vertex(Vertex::new(value.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    for (to, from, weight) in SAMPLE_EDGES {
        graph.add_edge(ids[to], ids[from], weight)?;
    }
    tracing::info!(mode = ?graph.mode(), "built sample graph");

    print!("{graph}");
    println!("vertices: {}", graph.vertex_count());
    println!("edges: {}", graph.edge_count());
    println!("maximum degree: {}", graph.maximum_degree());
    println!("average degree: {}", graph.average_degree()?);
    println!("self-loops: {}", graph.count_self_loops());

    let order = graph.depth_first_values()?;
    let order: Vec<&str> = order.into_iter().map(String::as_str).collect();
    println!("depth-first: {}", order.join(" -> "));

    Ok(())
}
