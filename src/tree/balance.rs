//! AVL height balancing: balance factors and the four rotations.
//!
//! `add` and `delete` call [`Tree::restore`] on every node of the modified
//! path, innermost first, so a rotation low in the tree settles before its
//! ancestors are checked.

use generational_arena::Index;
use tracing::trace;

use crate::tree::arena::{Balancing, Tree};

impl Tree {
    /// Applies the balancing policy to the subtree rooted at `idx` and
    /// returns the index of the node taking its place.
    pub(super) fn restore(&mut self, idx: Index) -> Index {
        match self.balancing() {
            Balancing::Plain => idx,
            Balancing::Avl => self.rebalance(idx),
        }
    }

    /// `height(left) - height(right)`; outside `{-1, 0, 1}` only transiently
    /// during an add/delete.
    pub(super) fn balance_factor(&self, idx: Index) -> i64 {
        let node = &self.arena[idx];
        self.height_at(node.left) as i64 - self.height_at(node.right) as i64
    }

    /// True iff every node satisfies the AVL height-balance invariant.
    pub fn is_balanced(&self) -> bool {
        self.balanced_at(self.root)
    }

    fn balanced_at(&self, idx: Option<Index>) -> bool {
        let Some(idx) = idx else { return true };
        let node = &self.arena[idx];
        self.balance_factor(idx).abs() <= 1
            && self.balanced_at(node.left)
            && self.balanced_at(node.right)
    }

    fn rebalance(&mut self, idx: Index) -> Index {
        match self.balance_factor(idx) {
            2 => {
                let Some(left) = self.arena[idx].left else {
                    return idx;
                };
                if self.balance_factor(left) >= 0 {
                    self.rotate_right(idx)
                } else {
                    self.rotate_left_right(idx)
                }
            }
            -2 => {
                let Some(right) = self.arena[idx].right else {
                    return idx;
                };
                if self.balance_factor(right) <= 0 {
                    self.rotate_left(idx)
                } else {
                    self.rotate_right_left(idx)
                }
            }
            _ => idx,
        }
    }

    /// Single left rotation: the right child becomes the subtree root.
    fn rotate_left(&mut self, idx: Index) -> Index {
        let Some(pivot) = self.arena[idx].right else {
            return idx;
        };
        trace!(?idx, ?pivot, "single left rotation");
        self.arena[idx].right = self.arena[pivot].left;
        self.arena[pivot].left = Some(idx);
        pivot
    }

    /// Single right rotation: the left child becomes the subtree root.
    fn rotate_right(&mut self, idx: Index) -> Index {
        let Some(pivot) = self.arena[idx].left else {
            return idx;
        };
        trace!(?idx, ?pivot, "single right rotation");
        self.arena[idx].left = self.arena[pivot].right;
        self.arena[pivot].right = Some(idx);
        pivot
    }

    /// Double right rotation for the left-right case.
    fn rotate_left_right(&mut self, idx: Index) -> Index {
        if let Some(left) = self.arena[idx].left {
            let new_left = self.rotate_left(left);
            self.arena[idx].left = Some(new_left);
        }
        self.rotate_right(idx)
    }

    /// Double left rotation for the right-left case.
    fn rotate_right_left(&mut self, idx: Index) -> Index {
        if let Some(right) = self.arena[idx].right {
            let new_right = self.rotate_right(right);
            self.arena[idx].right = Some(new_right);
        }
        self.rotate_left(idx)
    }
}
