//! CLI entry point for the `pgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use polygraph::cli::commands;
use polygraph::types::{GraphError, NodeId, Topology, DEFAULT_DEMO_NODE_COUNT};

#[derive(Parser)]
#[command(
    name = "pgraph",
    about = "polygraph CLI — build a small graph, configure its topology, and query it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command that builds a graph.
#[derive(Args)]
struct GraphArgs {
    /// Number of elements to insert ("0", "1", ...)
    #[arg(long, default_value_t = DEFAULT_DEMO_NODE_COUNT)]
    count: usize,

    /// Comma-separated elements to insert instead of --count
    #[arg(long)]
    elements: Option<String>,

    /// Topology: none, stack, or tree
    #[arg(long, default_value = "none")]
    topology: String,

    /// Relation between two nodes as X-Y (repeatable)
    #[arg(long = "relation")]
    relations: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency report of the graph
    Render {
        #[command(flatten)]
        graph: GraphArgs,
        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the shortest path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,
        /// Starting node ID
        from: NodeId,
        /// Destination node ID
        to: NodeId,
    },
}

fn build(args: GraphArgs) -> Result<polygraph::Graph<String>, GraphError> {
    let topology = match Topology::from_name(&args.topology) {
        Some(t) => t,
        None => {
            eprintln!("Invalid topology: {}", args.topology);
            process::exit(3);
        }
    };

    let mut relations = Vec::with_capacity(args.relations.len());
    for text in &args.relations {
        match commands::parse_relation(text) {
            Some(pair) => relations.push(pair),
            None => {
                eprintln!("Invalid relation: {}", text);
                process::exit(3);
            }
        }
    }

    let elements = match args.elements {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => commands::demo_elements(args.count),
    };

    commands::build_graph(elements, &relations, topology)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Render { graph, output } => build(graph)
            .and_then(|g| commands::cmd_render(&g, json, output.as_deref())),
        Commands::Path { graph, from, to } => {
            build(graph).and_then(|g| commands::cmd_path(&g, from, to, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::UnknownNode(_) => 4,
            GraphError::EmptyGraph | GraphError::NoPath { .. } => 5,
        };
        process::exit(code);
    }
}
