//! Ordered-tree operations: insertion, deletion, membership, traversals.

use generational_arena::Index;
use tracing::instrument;

use crate::tree::arena::{Node, Tree};

impl Tree {
    /// Adds `value` to the tree. Adding a present value is a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, value: i64) {
        let root = self.root;
        self.root = Some(self.add_at(root, value));
    }

    fn add_at(&mut self, idx: Option<Index>, value: i64) -> Index {
        let Some(idx) = idx else {
            return self.arena.insert(Node::leaf(value));
        };
        let current = self.arena[idx].value;
        if value < current {
            let left = self.arena[idx].left;
            let new_left = self.add_at(left, value);
            self.arena[idx].left = Some(new_left);
        } else if value > current {
            let right = self.arena[idx].right;
            let new_right = self.add_at(right, value);
            self.arena[idx].right = Some(new_right);
        } else {
            return idx;
        }
        self.restore(idx)
    }

    /// Removes `value` from the tree. Removing an absent value is a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, value: i64) {
        let root = self.root;
        self.root = self.delete_at(root, value);
    }

    fn delete_at(&mut self, idx: Option<Index>, value: i64) -> Option<Index> {
        let idx = idx?;
        let current = self.arena[idx].value;
        if value < current {
            let left = self.arena[idx].left;
            self.arena[idx].left = self.delete_at(left, value);
        } else if value > current {
            let right = self.arena[idx].right;
            self.arena[idx].right = self.delete_at(right, value);
        } else {
            match (self.arena[idx].left, self.arena[idx].right) {
                (None, None) => {
                    self.arena.remove(idx);
                    return None;
                }
                (Some(child), None) | (None, Some(child)) => {
                    self.arena.remove(idx);
                    return Some(child);
                }
                (Some(_), Some(right)) => {
                    // Two children: splice in the in-order successor, then
                    // remove the successor from the right subtree.
                    let successor = self.min_at(right);
                    let succ_value = self.arena[successor].value;
                    self.arena[idx].value = succ_value;
                    self.arena[idx].right = self.delete_at(Some(right), succ_value);
                }
            }
        }
        Some(self.restore(idx))
    }

    /// Returns true if `value` is a member of the tree. O(height).
    pub fn is_member(&self, value: i64) -> bool {
        self.member_at(self.root, value)
    }

    fn member_at(&self, idx: Option<Index>, value: i64) -> bool {
        let Some(idx) = idx else { return false };
        let node = &self.arena[idx];
        if value < node.value {
            self.member_at(node.left, value)
        } else if value > node.value {
            self.member_at(node.right, value)
        } else {
            true
        }
    }

    /// Number of values in the tree.
    pub fn size(&self) -> usize {
        self.size_at(self.root)
    }

    fn size_at(&self, idx: Option<Index>) -> usize {
        match idx {
            None => 0,
            Some(idx) => {
                1 + self.size_at(self.arena[idx].left) + self.size_at(self.arena[idx].right)
            }
        }
    }

    /// Height of the tree: 0 for empty, 1 for a single node.
    pub fn height(&self) -> usize {
        self.height_at(self.root)
    }

    pub(super) fn height_at(&self, idx: Option<Index>) -> usize {
        match idx {
            None => 0,
            Some(idx) => {
                let node = &self.arena[idx];
                1 + self.height_at(node.left).max(self.height_at(node.right))
            }
        }
    }

    /// Smallest value, None on the empty tree.
    pub fn minimum(&self) -> Option<i64> {
        self.root.map(|root| self.arena[self.min_at(root)].value)
    }

    /// Largest value, None on the empty tree.
    pub fn maximum(&self) -> Option<i64> {
        self.root.map(|root| self.arena[self.max_at(root)].value)
    }

    pub(super) fn min_at(&self, idx: Index) -> Index {
        match self.arena[idx].left {
            Some(left) => self.min_at(left),
            None => idx,
        }
    }

    fn max_at(&self, idx: Index) -> Index {
        match self.arena[idx].right {
            Some(right) => self.max_at(right),
            None => idx,
        }
    }

    /// Values in preorder (node, left, right). Recomputed on each call.
    pub fn preorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.preorder_at(self.root, &mut out);
        out
    }

    fn preorder_at(&self, idx: Option<Index>, out: &mut Vec<i64>) {
        if let Some(idx) = idx {
            let node = &self.arena[idx];
            out.push(node.value);
            self.preorder_at(node.left, out);
            self.preorder_at(node.right, out);
        }
    }

    /// Values in inorder (left, node, right): ascending sorted order.
    pub fn inorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.inorder_at(self.root, &mut out);
        out
    }

    fn inorder_at(&self, idx: Option<Index>, out: &mut Vec<i64>) {
        if let Some(idx) = idx {
            let node = &self.arena[idx];
            self.inorder_at(node.left, out);
            out.push(node.value);
            self.inorder_at(node.right, out);
        }
    }

    /// Values in postorder (left, right, node).
    pub fn postorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.postorder_at(self.root, &mut out);
        out
    }

    fn postorder_at(&self, idx: Option<Index>, out: &mut Vec<i64>) {
        if let Some(idx) = idx {
            let node = &self.arena[idx];
            self.postorder_at(node.left, out);
            self.postorder_at(node.right, out);
            out.push(node.value);
        }
    }

    /// Level-order listing of the perfect tree of `2^height - 1` slots.
    ///
    /// Slot `i` has children at `2i+1` and `2i+2`. A `None` marks every slot
    /// whose ancestor path ended at a leaf; subtrees under an absent child
    /// are never visited, their slots simply stay empty. The empty tree
    /// yields an empty listing.
    pub fn level_order_with_gaps(&self) -> Vec<Option<i64>> {
        let height = self.height();
        if height == 0 {
            return Vec::new();
        }
        let mut slots = vec![None; (1 << height) - 1];
        self.fill_slots(self.root, 0, &mut slots);
        slots
    }

    fn fill_slots(&self, idx: Option<Index>, pos: usize, slots: &mut [Option<i64>]) {
        let Some(idx) = idx else { return };
        let node = &self.arena[idx];
        slots[pos] = Some(node.value);
        self.fill_slots(node.left, 2 * pos + 1, slots);
        self.fill_slots(node.right, 2 * pos + 2, slots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::arena::Balancing;

    #[test]
    fn test_gap_listing_covers_perfect_tree() {
        let mut tree = Tree::new(Balancing::Plain);
        for v in [8, 4, 12, 2] {
            tree.add(v);
        }
        let slots = tree.level_order_with_gaps();
        assert_eq!(slots.len(), (1 << tree.height()) - 1);
        assert_eq!(slots.iter().flatten().count(), tree.size());
    }

    #[test]
    fn test_delete_frees_arena_nodes() {
        let mut tree = Tree::new(Balancing::Plain);
        for v in [5, 3, 8] {
            tree.add(v);
        }
        tree.delete(3);
        tree.delete(5);
        tree.delete(8);
        assert!(tree.is_empty());
        assert_eq!(tree.arena.len(), 0);
    }
}
