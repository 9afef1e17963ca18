//! polygraph — a generic labeled graph container.
//!
//! Stores arbitrary elements as nodes with sequential identifiers, tracks undirected
//! adjacency between them, and can rebuild that adjacency as a chain or a balanced
//! binary tree. Shortest paths are found with breadth-first search.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphSnapshot, JsonWriter, TextWriter};
pub use graph::{
    balanced_binary_tree_by_parity, balanced_binary_tree_table, bfs_traverse, is_connected,
    shortest_path, stack_table, Graph, GraphBuilder, Traversal,
};
pub use types::{
    AdjacencyTable, GraphError, GraphResult, Node, NodeId, Topology, DEFAULT_DEMO_NODE_COUNT,
};
