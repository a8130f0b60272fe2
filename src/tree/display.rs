//! Rendering: termtree hierarchy view and a 2D level diagram.

use generational_arena::Index;
use termtree::Tree as DisplayTree;

use crate::tree::arena::Tree;

impl Tree {
    /// Converts the tree into a printable termtree hierarchy, left child
    /// listed before right child.
    pub fn to_tree_string(&self) -> DisplayTree<String> {
        match self.root() {
            Some(root) => self.subtree_string(root),
            None => DisplayTree::new("(empty)".to_string()),
        }
    }

    fn subtree_string(&self, idx: Index) -> DisplayTree<String> {
        let node = &self.arena[idx];
        let leaves: Vec<_> = [node.left, node.right]
            .into_iter()
            .flatten()
            .map(|child| self.subtree_string(child))
            .collect();
        DisplayTree::new(node.value.to_string()).with_leaves(leaves)
    }
}

/// Renders a gap listing (see [`Tree::level_order_with_gaps`]) as a 2D
/// diagram: one row per level, every slot centered in an equal-width column
/// so parent/child alignment is visible. Gaps are shown as `gap_marker`.
pub fn render_levels(slots: &[Option<i64>], gap_marker: &str) -> String {
    if slots.is_empty() {
        return String::new();
    }
    // slots.len() == 2^height - 1
    let height = (slots.len() + 1).trailing_zeros() as usize;
    let cell = slots
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string().len(),
            None => gap_marker.len(),
        })
        .max()
        .unwrap_or(1)
        + 1;
    let width = cell * (1 << (height - 1));

    let mut out = String::new();
    for level in 0..height {
        let start = (1 << level) - 1;
        let count = 1 << level;
        let column = width / count;
        let mut row = String::new();
        for slot in &slots[start..start + count] {
            let text = match slot {
                Some(value) => value.to_string(),
                None => gap_marker.to_string(),
            };
            row.push_str(&format!("{text:^column$}"));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
