//! Topology labels describing how the adjacency table was last produced.

use serde::Serialize;

/// The current configuration of a graph's adjacency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Built incrementally from explicit relations (or not built at all).
    #[default]
    Custom,
    /// A linear chain over the nodes in insertion order.
    Stack,
    /// A 0-indexed complete binary tree rooted at node 0.
    BalancedBinaryTree,
}

impl Topology {
    /// Return a human-readable name for this topology.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Stack => "stack",
            Self::BalancedBinaryTree => "balanced_binary_tree",
        }
    }

    /// Parse a topology from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "custom" | "none" => Some(Self::Custom),
            "stack" | "chain" => Some(Self::Stack),
            "balanced_binary_tree" | "balancedbinarytree" | "tree" | "bbt" => {
                Some(Self::BalancedBinaryTree)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
