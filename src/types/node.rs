//! The node struct: an element plus its sequential identifier.

use serde::Serialize;

use super::NodeId;

/// A stored element together with the identifier the graph assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<T> {
    /// Identifier, equal to the node count at the time of insertion.
    pub id: NodeId,
    /// The payload carried by this node.
    pub element: T,
}

impl<T> Node<T> {
    /// Create a node with an explicit identifier.
    pub(crate) fn new(id: NodeId, element: T) -> Self {
        Self { id, element }
    }
}
