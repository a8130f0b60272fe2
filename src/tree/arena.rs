//! Arena-backed node storage.
//!
//! The textbook recursive formulation marks absent subtrees with an empty
//! sentinel node; here an absent subtree is simply an absent arena index.
//! Every structural helper takes the index of a subtree root and returns the
//! index of the node that must take its place, so the "operation returns the
//! updated root" contract survives the index-based representation.

use generational_arena::{Arena, Index};

/// Balancing policy, selected once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balancing {
    /// Plain binary search tree, no rebalancing.
    Plain,
    /// AVL height balancing after every add/delete.
    Avl,
}

/// Tree node in the arena. Absent children are absent indices.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node value
    pub value: i64,
    /// Index of the left subtree root, None for an empty subtree
    pub left: Option<Index>,
    /// Index of the right subtree root, None for an empty subtree
    pub right: Option<Index>,
}

impl Node {
    /// A node with two empty subtrees.
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Arena-based binary search tree over `i64` values.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. Duplicate values are rejected silently; the BST ordering
/// invariant holds for every reachable node, and under [`Balancing::Avl`]
/// the height-balance invariant is restored after every structural change.
#[derive(Debug)]
pub struct Tree {
    /// Arena storage for all tree nodes
    pub(super) arena: Arena<Node>,
    /// Index of the root node, None for the empty tree
    pub(super) root: Option<Index>,
    balancing: Balancing,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(Balancing::Plain)
    }
}

impl Tree {
    pub fn new(balancing: Balancing) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            balancing,
        }
    }

    pub fn balancing(&self) -> Balancing {
        self.balancing
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_is_empty() {
        let tree = Tree::new(Balancing::Avl);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.balancing(), Balancing::Avl);
    }

    #[test]
    fn test_default_is_plain() {
        let tree = Tree::default();
        assert_eq!(tree.balancing(), Balancing::Plain);
    }

    #[test]
    fn test_leaf_has_empty_children() {
        let node = Node::leaf(7);
        assert_eq!(node.value, 7);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }
}
