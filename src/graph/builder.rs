//! Fluent API for building Graph instances.

use crate::types::{GraphResult, NodeId, Topology};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder<T> {
    elements: Vec<T>,
    links: Vec<(NodeId, NodeId)>,
    topology: Topology,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            links: Vec::new(),
            topology: Topology::Custom,
        }
    }

    /// Add an element; returns the ID it will have in the built graph.
    pub fn add(&mut self, element: T) -> NodeId {
        self.elements.push(element);
        (self.elements.len() - 1) as NodeId
    }

    /// Add every element from an iterator.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) -> &mut Self {
        self.elements.extend(elements);
        self
    }

    /// Add a relation between two nodes.
    pub fn link(&mut self, x: NodeId, y: NodeId) -> &mut Self {
        self.links.push((x, y));
        self
    }

    /// Apply a topology after all nodes and links are in place.
    /// A derived topology replaces the links.
    pub fn topology(&mut self, topology: Topology) -> &mut Self {
        self.topology = topology;
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::with_capacity(self.elements.len());
        for element in self.elements {
            graph.add(element);
        }
        for (x, y) in self.links {
            graph.add_relation(x, y)?;
        }
        graph.configure(self.topology)?;
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
