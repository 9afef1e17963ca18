//! Core graph structure — nodes + undirected adjacency table.

use crate::types::{AdjacencyTable, GraphError, GraphResult, Node, NodeId, Topology};

/// A generic container of elements connected by undirected relations.
///
/// Nodes are append-only: identifiers are assigned sequentially from 0 and
/// never change. The adjacency table always holds exactly one entry per node.
/// The graph has no internal synchronization; wrap it in a lock if it must be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All nodes, indexed by ID.
    nodes: Vec<Node<T>>,
    /// Adjacency table: node id -> neighbor ids.
    adjacency: AdjacencyTable,
    /// How the adjacency table was last produced.
    configuration: Topology,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: AdjacencyTable::new(),
            configuration: Topology::Custom,
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            adjacency: AdjacencyTable::with_capacity(capacity),
            configuration: Topology::Custom,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// True when no nodes have been added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names an existing node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node<T>> {
        usize::try_from(id).ok().and_then(|idx| self.nodes.get(idx))
    }

    /// Get the element stored at `id`.
    pub fn element(&self, id: NodeId) -> Option<&T> {
        self.get_node(id).map(|n| &n.element)
    }

    /// Get the element stored at `id` (mutable).
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut T> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.nodes.get_mut(idx))
            .map(|n| &mut n.element)
    }

    /// Get all nodes in insertion order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// The neighbor list of `id`, in the order relations were recorded.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownNode(id))
    }

    /// The whole adjacency table.
    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// The topology the adjacency table currently reflects.
    pub fn configuration(&self) -> Topology {
        self.configuration
    }

    /// Add an element, returns the assigned ID.
    pub fn add(&mut self, element: T) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(id, element));
        self.adjacency.insert(id, Vec::new());
        self.configuration = Topology::Custom;
        log::debug!("added node {}", id);
        id
    }

    /// Record an undirected relation between two existing nodes.
    ///
    /// Duplicates and self-loops are accepted as-is.
    pub fn add_relation(&mut self, x: NodeId, y: NodeId) -> GraphResult<()> {
        for id in [x, y] {
            if !self.adjacency.contains_key(&id) {
                log::warn!("relation {}-{} rejected: node {} not found", x, y, id);
                return Err(GraphError::UnknownNode(id));
            }
        }

        self.adjacency.entry(x).or_default().push(y);
        self.adjacency.entry(y).or_default().push(x);
        self.configuration = Topology::Custom;
        log::debug!("added relation {}-{}", x, y);
        Ok(())
    }

    /// Install a freshly derived adjacency table wholesale.
    pub(crate) fn replace_adjacency(&mut self, table: AdjacencyTable, topology: Topology) {
        debug_assert_eq!(table.len(), self.nodes.len());
        self.adjacency = table;
        self.configuration = topology;
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
