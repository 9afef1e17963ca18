//! Stack and balanced-binary-tree configuration.

use std::collections::HashSet;

use polygraph::graph::{
    balanced_binary_tree_by_parity, balanced_binary_tree_table, is_connected, parent, Graph,
};
use polygraph::types::{GraphError, Topology};

use rand::Rng;

// ==================== Helpers ====================

fn graph_of(count: usize) -> Graph<usize> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = Graph::with_capacity(count);
    for i in 0..count {
        graph.add(i);
    }
    graph
}

/// Check the symmetry invariant: y in adj(x) iff x in adj(y), with multiplicity.
fn assert_symmetric(graph: &Graph<usize>) {
    for (&x, neighbors) in graph.adjacency() {
        for &y in neighbors {
            let forward = neighbors.iter().filter(|&&n| n == y).count();
            let backward = graph
                .neighbors(y)
                .unwrap()
                .iter()
                .filter(|&&n| n == x)
                .count();
            assert_eq!(forward, backward, "asymmetric edge {}-{}", x, y);
        }
    }
}

// ==================== Stack Tests ====================

#[test]
fn test_stack_neighbors() {
    for n in 2..30usize {
        let mut graph = graph_of(n);
        graph.configure_stack().unwrap();

        for i in 0..n as u64 {
            let expected: HashSet<u64> = [i.checked_sub(1), Some(i + 1)]
                .into_iter()
                .flatten()
                .filter(|&j| j < n as u64)
                .collect();
            let actual: HashSet<u64> = graph.neighbors(i).unwrap().iter().copied().collect();
            assert_eq!(actual, expected, "node {} of {}", i, n);
        }
        assert_eq!(graph.edge_count(), n - 1);
        assert!(is_connected(&graph));
        assert_symmetric(&graph);
    }
}

#[test]
fn test_stack_single_node() {
    let mut graph = graph_of(1);
    graph.configure_stack().unwrap();
    assert!(graph.neighbors(0).unwrap().is_empty());
    assert_eq!(graph.configuration(), Topology::Stack);
}

#[test]
fn test_stack_discards_previous_relations() {
    let mut graph = graph_of(4);
    graph.add_relation(0, 3).unwrap();
    graph.add_relation(1, 1).unwrap();
    graph.configure_stack().unwrap();

    assert_eq!(graph.to_string(), "0 -> 1\n1 -> 0,2\n2 -> 1,3\n3 -> 2\n");
}

#[test]
fn test_configure_empty_graph_rejected() {
    let mut graph = graph_of(0);

    assert!(matches!(graph.configure_stack(), Err(GraphError::EmptyGraph)));
    assert!(matches!(
        graph.configure_balanced_binary_tree(),
        Err(GraphError::EmptyGraph)
    ));
    assert!(graph.adjacency().is_empty());
    assert_eq!(graph.configuration(), Topology::Custom);
}

#[test]
fn test_configure_by_label() {
    let mut graph = graph_of(3);
    graph.add_relation(0, 2).unwrap();

    graph.configure(Topology::Custom).unwrap();
    assert_eq!(graph.neighbors(0).unwrap(), &[2]);

    graph.configure(Topology::Stack).unwrap();
    assert_eq!(graph.neighbors(0).unwrap(), &[1]);

    graph.configure(Topology::BalancedBinaryTree).unwrap();
    assert_eq!(graph.neighbors(0).unwrap(), &[1, 2]);
}

// ==================== Balanced Binary Tree Tests ====================

#[test]
fn test_tree_is_a_tree() {
    for n in 1..64usize {
        let mut graph = graph_of(n);
        graph.configure_balanced_binary_tree().unwrap();

        assert_eq!(graph.edge_count(), n - 1, "edge count for {}", n);
        assert!(is_connected(&graph), "tree of {} is disconnected", n);
        assert_symmetric(&graph);
    }
}

#[test]
fn test_tree_parents() {
    let mut graph = graph_of(40);
    graph.configure_balanced_binary_tree().unwrap();

    for k in 1..40u64 {
        let expected_parent = (k - 1) / 2;
        assert_eq!(parent(k), Some(expected_parent));
        assert!(
            graph.neighbors(k).unwrap().contains(&expected_parent),
            "node {} missing parent {}",
            k,
            expected_parent
        );
        // Every neighbor other than the parent is a child
        for &n in graph.neighbors(k).unwrap() {
            assert!(n == expected_parent || parent(n) == Some(k));
        }
    }
    // Root has no parent: all its neighbors are children
    for &n in graph.neighbors(0).unwrap() {
        assert_eq!(parent(n), Some(0));
    }
}

#[test]
fn test_tree_matches_parity_derivation() {
    for n in 0..=40usize {
        assert_eq!(
            balanced_binary_tree_table(n),
            balanced_binary_tree_by_parity(n),
            "tables differ for {} nodes",
            n
        );
    }
}

#[test]
fn test_tree_render_seven_nodes() {
    let mut graph = graph_of(7);
    graph.configure_balanced_binary_tree().unwrap();

    assert_eq!(
        graph.to_string(),
        "0 -> 1,2\n1 -> 0,3,4\n2 -> 0,5,6\n3 -> 1\n4 -> 1\n5 -> 2\n6 -> 2\n"
    );
}

#[test]
fn test_tree_random_sizes() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(1..500usize);
        let mut graph = graph_of(n);
        graph.configure_balanced_binary_tree().unwrap();
        assert_eq!(graph.edge_count(), n - 1);
        assert!(is_connected(&graph));
        assert_eq!(graph.adjacency().len(), n);
    }
}
