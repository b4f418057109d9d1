use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routegraph::{AdjListGraph, AdjMatrixGraph, GraphConfig, GraphError, GraphReader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "routegraph")]
#[command(about = "Depth-first traversal and all-pairs shortest paths over text-described graphs", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also log construction and computation events (warnings are always shown)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every weighted graph in a file and report shortest paths
    Dijkstra {
        /// Input file: count, labels, `from to weight` lines, `0 0 0`
        input: PathBuf,

        /// Also report this ordered pair in detail (repeatable)
        #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
        pair: Vec<usize>,

        /// Print JSON summaries instead of the text tables
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build every unweighted graph in a file and report its depth-first ordering
    Dfs {
        /// Input file: count, labels, `from to` lines, `0 0`
        input: PathBuf,

        /// Print JSON instead of the text layout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GraphConfig::default(),
    };

    match cli.command {
        Commands::Dijkstra { input, pair, json } => {
            let pairs: Vec<(usize, usize)> = pair.chunks_exact(2).map(|p| (p[0], p[1])).collect();
            run_dijkstra(&input, &pairs, json, config)?;
        }
        Commands::Dfs { input, json } => run_dfs(&input, json)?,
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<GraphConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
    GraphConfig::from_json_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// An empty-graph declaration or a graph over the vertex cap ends the file.
/// Malformed input (bad tokens, input ending mid-graph) is fatal.
fn end_of_graphs(err: &GraphError) -> bool {
    matches!(err, GraphError::EmptyGraph { .. } | GraphError::TooManyVertices { .. })
}

fn run_dijkstra(input: &Path, pairs: &[(usize, usize)], json: bool, config: GraphConfig) -> Result<()> {
    let text = read_input(input)?;
    let mut reader = GraphReader::new(&text);
    let mut index = 0;

    while !reader.is_exhausted() {
        index += 1;
        let mut graph: AdjMatrixGraph<String> = match AdjMatrixGraph::build_with_config(&mut reader, config.clone()) {
            Ok(graph) => graph,
            Err(err) if end_of_graphs(&err) => {
                warn!(graph = index, error = %err, "stopping before graph");
                break;
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to build graph {index}")),
        };
        graph.find_shortest_path();
        info!(graph = index, vertices = graph.vertex_count(), "shortest paths ready");

        if json {
            println!("{}", serde_json::to_string_pretty(&graph.summaries())?);
            continue;
        }

        print!("{}", graph.display_all());
        println!();
        for &(from, to) in pairs {
            match graph.display(from, to) {
                Ok(report) => print!("{report}"),
                Err(err) => warn!(from, to, error = %err, "pair skipped"),
            }
        }
    }

    Ok(())
}

fn run_dfs(input: &Path, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let mut reader = GraphReader::new(&text);
    let mut index = 0;

    while !reader.is_exhausted() {
        index += 1;
        let graph: AdjListGraph<String> = match AdjListGraph::build(&mut reader) {
            Ok(graph) => graph,
            Err(err) if end_of_graphs(&err) => {
                warn!(graph = index, error = %err, "stopping before graph");
                break;
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to build graph {index}")),
        };
        let forest = graph.depth_first_search()?;
        info!(graph = index, trees = forest.trees().len(), "depth-first search done");

        if json {
            println!("{}", serde_json::to_string_pretty(&forest)?);
        } else {
            print!("{graph}");
            println!("{forest}");
            println!();
        }
    }

    Ok(())
}
