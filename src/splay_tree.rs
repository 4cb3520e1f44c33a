//! Splay Tree implementation
//!
//! A splay tree is a binary search tree with no balance bookkeeping at all.
//! Instead, every successful access moves the accessed node to the root with a
//! sequence of rotations ("splaying"). The shape is a side effect of the access
//! history: recently used keys sit near the root.
//!
//! - O(log n) amortized `add`, `contains` and `remove`
//! - O(n) worst case for a single operation
//!
//! # Splaying
//!
//! While the node `x` is not the root, with parent `p` and grandparent `g`:
//!
//! - **zig**: `p` is the root. Rotate `x` up through `p`.
//! - **zig-zig**: `x` and `p` are both left children (or both right children).
//!   Rotate `g` first, then `p`, in the same direction.
//! - **zig-zag**: `x` is a left child of a right child (or vice versa). Rotate
//!   `p`, then `g`, in opposite directions.
//!
//! Rotating the grandparent first in the zig-zig case is what distinguishes
//! splaying from naive move-to-root and gives the amortized bound.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::OrderedSet;
//! use rust_classic_collections::splay_tree::SplayTree;
//!
//! let mut tree: SplayTree<i32> = (1..=10).collect();
//! assert!(tree.contains(&4));
//! assert_eq!(tree.root_key(), Some(&4));
//!
//! // Misses do not restructure the tree
//! assert!(!tree.contains(&42));
//! assert_eq!(tree.root_key(), Some(&4));
//! ```

use crate::compare::{Compare, Natural};
use crate::linked_tree::{linked_tree_set_impls, LinkedTree};
use crate::storage::NodeKey;
use crate::traits::OrderedSet;
use crate::traversal;

/// Self-adjusting binary search tree holding unique keys
pub struct SplayTree<K, C = Natural> {
    tree: LinkedTree<K, C>,
}

impl<K: Ord> SplayTree<K> {
    /// Creates an empty tree in natural key order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C: Compare<K>> SplayTree<K, C> {
    /// Creates an empty tree ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            tree: LinkedTree::new(cmp),
        }
    }

    /// The key currently at the root (the most recently accessed key)
    pub fn root_key(&self) -> Option<&K> {
        self.tree.root.map(|r| &self.tree.nodes[r].key)
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.tree.clear();
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

    /// Moves `node` to the root
    fn splay(&mut self, node: NodeKey) {
        let tree = &mut self.tree;
        while let Some(parent) = tree.parent(node) {
            let node_is_left = tree.is_left_child(node, parent);
            match tree.parent(parent) {
                // zig
                None => {
                    if node_is_left {
                        tree.rotate_right(parent);
                    } else {
                        tree.rotate_left(parent);
                    }
                }
                Some(grandparent) => {
                    let parent_is_left = tree.is_left_child(parent, grandparent);
                    match (node_is_left, parent_is_left) {
                        // zig-zig
                        (true, true) => {
                            tree.rotate_right(grandparent);
                            tree.rotate_right(parent);
                        }
                        (false, false) => {
                            tree.rotate_left(grandparent);
                            tree.rotate_left(parent);
                        }
                        // zig-zag
                        (true, false) => {
                            tree.rotate_right(parent);
                            tree.rotate_left(grandparent);
                        }
                        (false, true) => {
                            tree.rotate_left(parent);
                            tree.rotate_right(grandparent);
                        }
                    }
                }
            }
        }
    }

    /// Checks BST ordering and parent links
    pub fn verify_invariants(&self) -> bool {
        self.tree.verify_order()
    }
}

impl<K, C: Compare<K>> OrderedSet<K> for SplayTree<K, C> {
    /// Inserts the key as a leaf, then splays the new node to the root
    fn add(&mut self, key: K) -> bool {
        match self.tree.attach_leaf(key, ()) {
            Some(node) => {
                self.splay(node);
                true
            }
            None => false,
        }
    }

    /// Looks up a key, splaying it to the root when found
    fn contains(&mut self, key: &K) -> bool {
        match self.tree.find_node(key) {
            Some(node) => {
                self.splay(node);
                true
            }
            None => false,
        }
    }

    /// Splays the key to the root, then removes it
    ///
    /// With two children the root takes the key of its in-order successor
    /// (the minimum of the right subtree) and the successor node is removed.
    fn remove(&mut self, key: &K) -> bool {
        if !self.contains(key) {
            return false;
        }
        let Some(node) = self.tree.root else {
            return false;
        };
        self.tree.remove_node(node);
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

linked_tree_set_impls!(SplayTree);
