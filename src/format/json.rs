//! JSON export of a graph (for CLI output).

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphResult, NodeId, Topology};

/// One node of a [`GraphSnapshot`].
#[derive(Debug, Serialize)]
pub struct NodeSnapshot<'a, T> {
    pub id: NodeId,
    pub element: &'a T,
    pub neighbors: &'a [NodeId],
}

/// Borrowed, serializable view of a graph in insertion order.
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a, T> {
    pub configuration: Topology,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeSnapshot<'a, T>>,
}

impl<'a, T> GraphSnapshot<'a, T> {
    /// Capture the current state of `graph`.
    pub fn capture(graph: &'a Graph<T>) -> GraphResult<Self> {
        let nodes = graph
            .nodes()
            .iter()
            .map(|n| -> GraphResult<NodeSnapshot<'a, T>> {
                Ok(NodeSnapshot {
                    id: n.id,
                    element: &n.element,
                    neighbors: graph.neighbors(n.id)?,
                })
            })
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(Self {
            configuration: graph.configuration(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            nodes,
        })
    }
}

impl<T: Serialize> Graph<T> {
    /// Serialize the graph snapshot to a JSON string.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let snapshot = GraphSnapshot::capture(self)?;
        let json = if pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(json)
    }
}

/// Writes JSON snapshots of a graph.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Create a writer; `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write the snapshot to any writer.
    pub fn write_to<T: Serialize>(&self, graph: &Graph<T>, writer: &mut impl Write) -> GraphResult<()> {
        let snapshot = GraphSnapshot::capture(graph)?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &snapshot)?;
        } else {
            serde_json::to_writer(&mut *writer, &snapshot)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Write the snapshot to a file, replacing it if present.
    pub fn write_to_file<T: Serialize>(&self, graph: &Graph<T>, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
