//! Error types for the polygraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the polygraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A topology was requested on a graph with no nodes.
    #[error("Cannot configure a topology on an empty graph")]
    EmptyGraph,

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    UnknownNode(NodeId),

    /// The two nodes are in different components.
    #[error("No path from node {from} to node {to}")]
    NoPath { from: NodeId, to: NodeId },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for polygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
