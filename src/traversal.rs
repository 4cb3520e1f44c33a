//! Pre-, in- and post-order traversal of binary trees
//!
//! The walks are written once against the [`BinaryTree`] accessor trait and
//! shared by [`BinarySearchTree`](crate::binary_search_tree::BinarySearchTree),
//! [`RedBlackTree`](crate::red_black_tree::RedBlackTree) and
//! [`SplayTree`](crate::splay_tree::SplayTree). They are iterative with an
//! explicit stack, so a degenerate (list-shaped) tree cannot overflow the call
//! stack.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::binary_search_tree::BinarySearchTree;
//! use rust_classic_collections::traversal::{traverse_pre_order, in_order_keys};
//!
//! let tree: BinarySearchTree<i32> = [4, 2, 6, 1, 3].into_iter().collect();
//!
//! let mut pre = Vec::new();
//! traverse_pre_order(&tree, |k| pre.push(*k));
//! assert_eq!(pre, vec![4, 2, 1, 3, 6]);
//!
//! assert_eq!(in_order_keys(&tree), vec![&1, &2, &3, &4, &6]);
//! ```

use crate::storage::NodeKey;

/// Read access to a left/right-linked tree
pub trait BinaryTree {
    /// Type of the keys held in the nodes
    type Key;

    /// The root node, or `None` for an empty tree
    fn root(&self) -> Option<NodeKey>;

    /// Left child of `node`, if any
    fn left(&self, node: NodeKey) -> Option<NodeKey>;

    /// Right child of `node`, if any
    fn right(&self, node: NodeKey) -> Option<NodeKey>;

    /// The key stored at `node`
    fn key(&self, node: NodeKey) -> &Self::Key;
}

/// Visits each key before its subtrees (node, left, right)
pub fn traverse_pre_order<'a, T, F>(tree: &'a T, mut visit: F)
where
    T: BinaryTree + ?Sized,
    F: FnMut(&'a T::Key),
{
    let Some(root) = tree.root() else {
        return;
    };

    let mut stack = vec![root];
    while let Some(top) = stack.pop() {
        visit(tree.key(top));
        if let Some(right) = tree.right(top) {
            stack.push(right);
        }
        if let Some(left) = tree.left(top) {
            stack.push(left);
        }
    }
}

/// Visits keys in ascending order (left, node, right)
pub fn traverse_in_order<'a, T, F>(tree: &'a T, mut visit: F)
where
    T: BinaryTree + ?Sized,
    F: FnMut(&'a T::Key),
{
    let mut stack = Vec::new();
    let mut current = tree.root();
    while current.is_some() || !stack.is_empty() {
        if let Some(node) = current {
            stack.push(node);
            current = tree.left(node);
        } else if let Some(node) = stack.pop() {
            visit(tree.key(node));
            current = tree.right(node);
        }
    }
}

/// Visits each key after its subtrees (left, right, node)
pub fn traverse_post_order<'a, T, F>(tree: &'a T, mut visit: F)
where
    T: BinaryTree + ?Sized,
    F: FnMut(&'a T::Key),
{
    let mut stack: Vec<NodeKey> = Vec::new();
    let mut current = tree.root();
    let mut last_visited: Option<NodeKey> = None;

    while current.is_some() || !stack.is_empty() {
        if let Some(node) = current {
            stack.push(node);
            current = tree.left(node);
            continue;
        }

        let Some(&top) = stack.last() else {
            break;
        };
        match tree.right(top) {
            // Coming up from the left subtree: descend right first
            Some(right) if last_visited != Some(right) => current = Some(right),
            _ => {
                stack.pop();
                visit(tree.key(top));
                last_visited = Some(top);
            }
        }
    }
}

/// Collects the keys in ascending order
pub fn in_order_keys<T>(tree: &T) -> Vec<&T::Key>
where
    T: BinaryTree + ?Sized,
{
    let mut keys = Vec::new();
    traverse_in_order(tree, |k| keys.push(k));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_search_tree::BinarySearchTree;
    use crate::OrderedSet;

    fn sample() -> BinarySearchTree<i32> {
        //        8
        //      /   \
        //     3     10
        //    / \      \
        //   1   6      14
        //      / \    /
        //     4   7  13
        let mut tree = BinarySearchTree::new();
        for k in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            tree.add(k);
        }
        tree
    }

    #[test]
    fn test_pre_order() {
        let tree = sample();
        let mut keys = Vec::new();
        traverse_pre_order(&tree, |k| keys.push(*k));
        assert_eq!(keys, vec![8, 3, 1, 6, 4, 7, 10, 14, 13]);
    }

    #[test]
    fn test_in_order() {
        let tree = sample();
        let mut keys = Vec::new();
        traverse_in_order(&tree, |k| keys.push(*k));
        assert_eq!(keys, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn test_post_order() {
        let tree = sample();
        let mut keys = Vec::new();
        traverse_post_order(&tree, |k| keys.push(*k));
        assert_eq!(keys, vec![1, 4, 7, 6, 3, 13, 14, 10, 8]);
    }

    #[test]
    fn test_empty_tree_visits_nothing() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        let mut count = 0;
        traverse_pre_order(&tree, |_| count += 1);
        traverse_in_order(&tree, |_| count += 1);
        traverse_post_order(&tree, |_| count += 1);
        assert_eq!(count, 0);
    }
}
