//! Red-Black Tree implementation
//!
//! A red-black tree is a binary search tree whose nodes carry a color bit,
//! kept consistent with five invariants:
//!
//! 1. Every node is red or black
//! 2. The root is black
//! 3. Nil leaves are black
//! 4. A red node has no red child
//! 5. Every path from a node down to a nil leaf crosses the same number of
//!    black nodes (the black-height)
//!
//! Together these bound the height at 2·log₂(n + 1), so every operation is
//! O(log n) worst-case.
//!
//! # Algorithm Overview
//!
//! **Insert**: descend as in a plain BST and attach a new red node. Only
//! invariant 4 can break (red parent). The fixup walks upward:
//! - red uncle: recolor parent and uncle black, grandparent red, continue from
//!   the grandparent
//! - black uncle: at most two rotations plus a recolor, then stop
//!
//! **Delete**: a node with two children takes its in-order successor's key and
//! the successor node is removed instead, so the removed node always has at
//! most one child. Removing a black node leaves one path a black short; the
//! delete fixup repairs it by case analysis on the sibling and the sibling's
//! children (four cases per side), using at most three rotations.
//!
//! Nil leaves are not materialized: an absent child (`None`) is a nil leaf and
//! reads as black. Keys are only ever read from real nodes.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::OrderedSet;
//! use rust_classic_collections::red_black_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for k in [10, 20, 30, 15, 25, 5] {
//!     tree.add(k);
//! }
//! assert!(tree.remove(&10));
//! assert!(!tree.contains(&10));
//! assert!(tree.verify_invariants());
//! ```

use crate::compare::{Compare, Natural};
use crate::linked_tree::{linked_tree_set_impls, LinkedTree};
use crate::storage::NodeKey;
use crate::traits::OrderedSet;
use crate::traversal;

/// Node color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Red-black tree holding unique keys
pub struct RedBlackTree<K, C = Natural> {
    tree: LinkedTree<K, C, Color>,
}

impl<K: Ord> RedBlackTree<K> {
    /// Creates an empty tree in natural key order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C: Compare<K>> RedBlackTree<K, C> {
    /// Creates an empty tree ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            tree: LinkedTree::new(cmp),
        }
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the stored key equal to `key`, if present
    pub fn search(&self, key: &K) -> Option<&K> {
        self.tree.find_node(key).map(|n| &self.tree.nodes[n].key)
    }

    /// Color of the node holding `key`, if present
    pub fn color_of(&self, key: &K) -> Option<Color> {
        self.tree.find_node(key).map(|n| self.color(n))
    }

    /// Black-height of the root: black nodes on any path from the root down to
    /// a nil leaf, counting the nil leaf and not counting the root
    ///
    /// An empty tree has black-height 0.
    pub fn black_height(&self) -> usize {
        let Some(root) = self.tree.root else {
            return 0;
        };
        let mut height = 1;
        let mut current = self.tree.nodes[root].left;
        while let Some(n) = current {
            if self.color(n) == Color::Black {
                height += 1;
            }
            current = self.tree.nodes[n].left;
        }
        height
    }

    /// Calls `visit` on each key before its subtrees
    pub fn traverse_pre_order<'a>(&'a self, visit: impl FnMut(&'a K)) {
        traversal::traverse_pre_order(self, visit);
    }

    /// Calls `visit` on each key in ascending order
    pub fn traverse_in_order<'a>(&'a self, visit: impl FnMut(&'a K)) {
        traversal::traverse_in_order(self, visit);
    }

    /// Calls `visit` on each key after its subtrees
    pub fn traverse_post_order<'a>(&'a self, visit: impl FnMut(&'a K)) {
        traversal::traverse_post_order(self, visit);
    }

    #[inline]
    fn color(&self, node: NodeKey) -> Color {
        self.tree.nodes[node].tag
    }

    #[inline]
    fn is_red(&self, node: Option<NodeKey>) -> bool {
        node.is_some_and(|n| self.color(n) == Color::Red)
    }

    #[inline]
    fn is_black(&self, node: Option<NodeKey>) -> bool {
        !self.is_red(node)
    }

    #[inline]
    fn set_color(&mut self, node: Option<NodeKey>, color: Color) {
        if let Some(n) = node {
            self.tree.nodes[n].tag = color;
        }
    }

    #[inline]
    fn left(&self, node: NodeKey) -> Option<NodeKey> {
        self.tree.nodes[node].left
    }

    #[inline]
    fn right(&self, node: NodeKey) -> Option<NodeKey> {
        self.tree.nodes[node].right
    }

    /// Restores invariant 4 after attaching the red node `node`
    fn insert_fixup(&mut self, mut node: NodeKey) {
        loop {
            let Some(parent) = self.tree.parent(node) else {
                break;
            };
            if self.color(parent) == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists
            let Some(grandparent) = self.tree.parent(parent) else {
                break;
            };

            if self.left(grandparent) == Some(parent) {
                let uncle = self.right(grandparent);
                if self.is_red(uncle) {
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    node = grandparent;
                } else {
                    let mut parent = parent;
                    if self.right(parent) == Some(node) {
                        // Inner grandchild: rotate it into the outer position
                        self.tree.rotate_left(parent);
                        std::mem::swap(&mut node, &mut parent);
                    }
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    self.tree.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.is_red(uncle) {
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    node = grandparent;
                } else {
                    let mut parent = parent;
                    if self.left(parent) == Some(node) {
                        self.tree.rotate_right(parent);
                        std::mem::swap(&mut node, &mut parent);
                    }
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    self.tree.rotate_left(grandparent);
                }
            }
        }

        let root = self.tree.root;
        self.set_color(root, Color::Black);
    }

    /// Restores the black-height after a black node was spliced out
    ///
    /// `node` is the child that took the removed node's place (possibly a nil
    /// leaf, hence `Option`) and `parent` is its parent. Ends when `node` is
    /// red, reaches the root, or a terminal rotation case has run.
    fn delete_fixup(&mut self, mut node: Option<NodeKey>, mut parent: Option<NodeKey>) {
        while node != self.tree.root && self.is_black(node) {
            let Some(p) = parent else {
                break;
            };

            if self.left(p) == node {
                let Some(mut sibling) = self.right(p) else {
                    break;
                };
                if self.color(sibling) == Color::Red {
                    self.set_color(Some(sibling), Color::Black);
                    self.set_color(Some(p), Color::Red);
                    self.tree.rotate_left(p);
                    match self.right(p) {
                        Some(s) => sibling = s,
                        None => break,
                    }
                }
                let near = self.left(sibling);
                let far = self.right(sibling);
                if self.is_black(near) && self.is_black(far) {
                    self.set_color(Some(sibling), Color::Red);
                    node = Some(p);
                    parent = self.tree.parent(p);
                } else {
                    if self.is_black(far) {
                        self.set_color(near, Color::Black);
                        self.set_color(Some(sibling), Color::Red);
                        self.tree.rotate_right(sibling);
                        match self.right(p) {
                            Some(s) => sibling = s,
                            None => break,
                        }
                    }
                    let parent_color = self.color(p);
                    self.set_color(Some(sibling), parent_color);
                    self.set_color(Some(p), Color::Black);
                    let far = self.right(sibling);
                    self.set_color(far, Color::Black);
                    self.tree.rotate_left(p);
                    node = self.tree.root;
                    parent = None;
                }
            } else {
                let Some(mut sibling) = self.left(p) else {
                    break;
                };
                if self.color(sibling) == Color::Red {
                    self.set_color(Some(sibling), Color::Black);
                    self.set_color(Some(p), Color::Red);
                    self.tree.rotate_right(p);
                    match self.left(p) {
                        Some(s) => sibling = s,
                        None => break,
                    }
                }
                let near = self.right(sibling);
                let far = self.left(sibling);
                if self.is_black(near) && self.is_black(far) {
                    self.set_color(Some(sibling), Color::Red);
                    node = Some(p);
                    parent = self.tree.parent(p);
                } else {
                    if self.is_black(far) {
                        self.set_color(near, Color::Black);
                        self.set_color(Some(sibling), Color::Red);
                        self.tree.rotate_left(sibling);
                        match self.left(p) {
                            Some(s) => sibling = s,
                            None => break,
                        }
                    }
                    let parent_color = self.color(p);
                    self.set_color(Some(sibling), parent_color);
                    self.set_color(Some(p), Color::Black);
                    let far = self.left(sibling);
                    self.set_color(far, Color::Black);
                    self.tree.rotate_right(p);
                    node = self.tree.root;
                    parent = None;
                }
            }
        }

        self.set_color(node, Color::Black);
    }

    /// Checks BST order, parent links and all five red-black invariants
    pub fn verify_invariants(&self) -> bool {
        let Some(root) = self.tree.root else {
            return self.tree.len() == 0;
        };
        if self.color(root) != Color::Black || !self.tree.verify_order() {
            return false;
        }
        self.verify_colors(Some(root)).is_some()
    }

    /// Returns the black-height of the subtree, or `None` on a red-red edge or
    /// unequal black-heights
    ///
    /// Only called once `verify_order` has passed. Recursion depth is then
    /// bounded by the height, which the color rules keep logarithmic, and the
    /// walk bails out at the first violation.
    fn verify_colors(&self, node: Option<NodeKey>) -> Option<usize> {
        let Some(n) = node else {
            return Some(1);
        };
        let (left, right) = (self.left(n), self.right(n));
        if self.is_red(Some(n)) && (self.is_red(left) || self.is_red(right)) {
            return None;
        }
        let left_height = self.verify_colors(left)?;
        let right_height = self.verify_colors(right)?;
        if left_height != right_height {
            return None;
        }
        Some(left_height + usize::from(self.color(n) == Color::Black))
    }
}

impl<K, C: Compare<K>> OrderedSet<K> for RedBlackTree<K, C> {
    fn add(&mut self, key: K) -> bool {
        match self.tree.attach_leaf(key, Color::Red) {
            Some(node) => {
                self.insert_fixup(node);
                true
            }
            None => false,
        }
    }

    fn contains(&mut self, key: &K) -> bool {
        self.tree.find_node(key).is_some()
    }

    fn remove(&mut self, key: &K) -> bool {
        let Some(target) = self.tree.find_node(key) else {
            return false;
        };

        // The node actually unlinked has at most one child; its child (if any)
        // now hangs where it was
        let removed = self.tree.remove_node(target);
        if removed.tag == Color::Black {
            self.delete_fixup(removed.left.or(removed.right), removed.parent);
        }
        true
    }

    fn find_minimum(&self) -> Option<&K> {
        self.tree.minimum()
    }

    fn find_maximum(&self) -> Option<&K> {
        self.tree.maximum()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }
}

linked_tree_set_impls!(RedBlackTree);
