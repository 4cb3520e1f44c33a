//! Unbalanced Binary Search Tree
//!
//! The baseline ordered set: keys are placed by plain BST descent and the
//! shape depends entirely on insertion order. Sorted input degrades it to a
//! linked list, which is exactly what the [red-black](crate::red_black_tree)
//! and [splay](crate::splay_tree) trees exist to avoid.
//!
//! # Time Complexity
//!
//! | Operation      | Average  | Worst |
//! |----------------|----------|-------|
//! | `add`          | O(log n) | O(n)  |
//! | `contains`     | O(log n) | O(n)  |
//! | `remove`       | O(log n) | O(n)  |
//! | `find_minimum` | O(log n) | O(n)  |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::OrderedSet;
//! use rust_classic_collections::binary_search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.add(5);
//! tree.add(2);
//! tree.add(8);
//! assert!(tree.contains(&2));
//! assert_eq!(tree.find_minimum(), Some(&2));
//! assert!(tree.remove(&5));
//! assert_eq!(tree.len(), 2);
//! ```

use crate::compare::{Compare, Natural};
use crate::linked_tree::{linked_tree_set_impls, LinkedTree};
use crate::traits::OrderedSet;
use crate::traversal;

/// Unbalanced binary search tree holding unique keys
pub struct BinarySearchTree<K, C = Natural> {
    tree: LinkedTree<K, C>,
}

impl<K: Ord> BinarySearchTree<K> {
    /// Creates an empty tree in natural key order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C: Compare<K>> BinarySearchTree<K, C> {
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

    /// Checks ordering and parent links of every node
    pub fn verify_invariants(&self) -> bool {
        self.tree.verify_order()
    }
}

impl<K, C: Compare<K>> OrderedSet<K> for BinarySearchTree<K, C> {
    fn add(&mut self, key: K) -> bool {
        self.tree.attach_leaf(key, ()).is_some()
    }

    fn contains(&mut self, key: &K) -> bool {
        self.tree.find_node(key).is_some()
    }

    /// Removes a key
    ///
    /// A node with two children takes its in-order successor's key, and the
    /// successor node (which has no left child) is removed in its place.
    fn remove(&mut self, key: &K) -> bool {
        let Some(node) = self.tree.find_node(key) else {
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

linked_tree_set_impls!(BinarySearchTree);
