//! Topology configurators — rebuild the adjacency table from the node set.
//!
//! Both configurators replace the table wholesale; relations recorded with
//! `add_relation` beforehand are discarded.

use crate::types::{AdjacencyTable, GraphError, GraphResult, NodeId, Topology};

use super::Graph;

/// Left child of `id` in a 0-indexed complete binary tree.
pub fn left_child(id: NodeId) -> NodeId {
    id.saturating_mul(2).saturating_add(1)
}

/// Right child of `id` in a 0-indexed complete binary tree.
pub fn right_child(id: NodeId) -> NodeId {
    id.saturating_mul(2).saturating_add(2)
}

/// Parent of `id` in a 0-indexed complete binary tree; `None` for the root.
pub fn parent(id: NodeId) -> Option<NodeId> {
    id.checked_sub(1).map(|p| p / 2)
}

/// Parent of `id` derived from its parity: odd ids are left children,
/// even ids are right children.
pub fn parity_parent(id: NodeId) -> Option<NodeId> {
    match id {
        0 => None,
        odd if odd % 2 != 0 => Some((odd - 1) / 2),
        even => Some((even - 2) / 2),
    }
}

/// Adjacency table of a linear chain over `count` nodes.
pub fn stack_table(count: usize) -> AdjacencyTable {
    let count = count as NodeId;
    let mut table = AdjacencyTable::with_capacity(count as usize);

    for id in 0..count {
        let mut neighbors = Vec::with_capacity(2);
        if let Some(prev) = id.checked_sub(1) {
            neighbors.push(prev);
        }
        if id + 1 < count {
            neighbors.push(id + 1);
        }
        table.insert(id, neighbors);
    }
    table
}

/// Adjacency table of a balanced binary tree over `count` nodes, built top-down
/// from each parent to its children.
pub fn balanced_binary_tree_table(count: usize) -> AdjacencyTable {
    let count = count as NodeId;
    let mut table = AdjacencyTable::with_capacity(count as usize);

    for root in 0..count {
        table.entry(root).or_default();
        for child in [left_child(root), right_child(root)] {
            if child < count {
                table.entry(root).or_default().push(child);
                table.entry(child).or_default().push(root);
            }
        }
    }
    table
}

/// Adjacency table of a balanced binary tree built node-by-node, each node
/// deriving its parent from parity. Produces the same table as
/// [`balanced_binary_tree_table`].
pub fn balanced_binary_tree_by_parity(count: usize) -> AdjacencyTable {
    let count = count as NodeId;
    let mut table = AdjacencyTable::with_capacity(count as usize);

    for id in 0..count {
        let mut neighbors = Vec::with_capacity(3);
        if let Some(p) = parity_parent(id) {
            neighbors.push(p);
        }
        if left_child(id) < count {
            neighbors.push(left_child(id));
        }
        if right_child(id) < count {
            neighbors.push(right_child(id));
        }
        table.insert(id, neighbors);
    }
    table
}

impl<T> Graph<T> {
    /// Rebuild the adjacency table as a chain: node `i` neighbors `i-1` and `i+1`.
    pub fn configure_stack(&mut self) -> GraphResult<()> {
        self.configure_with(Topology::Stack, stack_table)
    }

    /// Rebuild the adjacency table as a balanced binary tree rooted at node 0,
    /// where node `r` has children `2r+1` and `2r+2`.
    pub fn configure_balanced_binary_tree(&mut self) -> GraphResult<()> {
        self.configure_with(Topology::BalancedBinaryTree, balanced_binary_tree_table)
    }

    /// Apply a topology by label. `Topology::Custom` keeps the current relations.
    pub fn configure(&mut self, topology: Topology) -> GraphResult<()> {
        match topology {
            Topology::Custom => Ok(()),
            Topology::Stack => self.configure_stack(),
            Topology::BalancedBinaryTree => self.configure_balanced_binary_tree(),
        }
    }

    fn configure_with(
        &mut self,
        topology: Topology,
        build: fn(usize) -> AdjacencyTable,
    ) -> GraphResult<()> {
        if self.is_empty() {
            log::warn!("cannot configure {} on an empty graph", topology);
            return Err(GraphError::EmptyGraph);
        }

        let table = build(self.node_count());
        self.replace_adjacency(table, topology);
        log::debug!(
            "configured {} over {} nodes ({} edges)",
            topology,
            self.node_count(),
            self.edge_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_and_parent_arithmetic_agree() {
        for id in 0..64u64 {
            assert_eq!(parent(left_child(id)), Some(id));
            assert_eq!(parent(right_child(id)), Some(id));
            assert_eq!(parent(id), parity_parent(id));
        }
        assert_eq!(parent(0), None);
    }

    #[test]
    fn child_arithmetic_saturates() {
        assert_eq!(left_child(u64::MAX), u64::MAX);
        assert_eq!(right_child(u64::MAX / 2), u64::MAX);
    }

    #[test]
    fn tree_neighbor_order_is_parent_then_children() {
        let table = balanced_binary_tree_table(7);
        assert_eq!(table[&0], vec![1, 2]);
        assert_eq!(table[&1], vec![0, 3, 4]);
        assert_eq!(table[&2], vec![0, 5, 6]);
        assert_eq!(table[&6], vec![2]);
    }

    #[test]
    fn zero_count_tables_are_empty() {
        assert!(stack_table(0).is_empty());
        assert!(balanced_binary_tree_table(0).is_empty());
        assert!(balanced_binary_tree_by_parity(0).is_empty());
    }
}
