//! All data types for the polygraph library.

use std::collections::HashMap;

pub mod error;
pub mod node;
pub mod topology;

pub use error::{GraphError, GraphResult};
pub use node::Node;
pub use topology::Topology;

/// Node identifier. Identifiers are dense and start at 0; more than `u64::MAX`
/// insertions are unsupported.
pub type NodeId = u64;

/// Per-node neighbor lists encoding undirected edges.
pub type AdjacencyTable = HashMap<NodeId, Vec<NodeId>>;

/// Number of elements the `pgraph` demo inserts when none are given.
pub const DEFAULT_DEMO_NODE_COUNT: usize = 7;
