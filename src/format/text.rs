//! Plain-text adjacency report: one `<id> -> <neighbors>` line per node.

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

impl<T> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            let neighbors = self.neighbors(node.id).map_err(|_| fmt::Error)?;
            let joined: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
            writeln!(f, "{} -> {}", node.id, joined.join(","))?;
        }
        Ok(())
    }
}

/// Writes the text report for a graph.
pub struct TextWriter;

impl TextWriter {
    /// Write the report to any writer.
    pub fn write_to<T>(graph: &Graph<T>, writer: &mut impl Write) -> GraphResult<()> {
        write!(writer, "{}", graph)?;
        Ok(())
    }

    /// Write the report to a file, replacing it if present.
    pub fn write_to_file<T>(graph: &Graph<T>, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
