//! CLI command implementations.

use std::path::Path;

use crate::format::{JsonWriter, TextWriter};
use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphResult, NodeId, Topology};

/// Elements `"0"`, `"1"`, ... used when the caller gives only a count.
pub fn demo_elements(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}

/// Parse a relation written as `X-Y` or `X,Y`.
pub fn parse_relation(text: &str) -> Option<(NodeId, NodeId)> {
    let (x, y) = text.split_once(['-', ','])?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Build the graph the demo commands operate on.
pub fn build_graph(
    elements: Vec<String>,
    relations: &[(NodeId, NodeId)],
    topology: Topology,
) -> GraphResult<Graph<String>> {
    let mut builder = GraphBuilder::new();
    builder.extend(elements).topology(topology);
    for &(x, y) in relations {
        builder.link(x, y);
    }
    builder.build()
}

/// Print (or write to `output`) the adjacency report of a graph.
pub fn cmd_render(graph: &Graph<String>, json: bool, output: Option<&Path>) -> GraphResult<()> {
    match output {
        Some(path) => {
            if json {
                JsonWriter::new(true).write_to_file(graph, path)?;
            } else {
                TextWriter::write_to_file(graph, path)?;
            }
            println!("Wrote {} nodes to {}", graph.node_count(), path.display());
        }
        None => {
            if json {
                println!("{}", graph.to_json(true)?);
            } else {
                print!("{}", graph);
            }
        }
    }
    Ok(())
}

/// Print the shortest path between two nodes.
pub fn cmd_path(graph: &Graph<String>, from: NodeId, to: NodeId, json: bool) -> GraphResult<()> {
    let path = graph.shortest_path(from, to)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "from": from,
                "to": to,
                "path": path,
                "length": path.len(),
            })
        );
    } else {
        let hops: Vec<String> = path.iter().map(|id| id.to_string()).collect();
        println!("{}", hops.join(" -> "));
    }
    Ok(())
}
