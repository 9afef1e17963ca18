//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod polymorphic_graph;
pub mod topology;
pub mod traversal;

pub use builder::GraphBuilder;
pub use polymorphic_graph::Graph;
pub use topology::{
    balanced_binary_tree_by_parity, balanced_binary_tree_table, left_child, parent,
    parity_parent, right_child, stack_table,
};
pub use traversal::{bfs_traverse, is_connected, shortest_path, Traversal};
