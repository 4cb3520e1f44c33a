//! Parent-linked binary tree core shared by the search trees
//!
//! Holds the arena, the root and the comparator, and implements the pieces
//! every search tree needs unchanged: keyed descent, leaf attachment,
//! rotations, splicing out a node with at most one child, and the ordering
//! check. Each tree adds its own balancing on top. The per-node `tag` carries
//! whatever extra state a tree keeps (the red-black color; nothing otherwise).

use crate::compare::Compare;
use crate::storage::{NodeArena, NodeKey};
use crate::traversal::{self, BinaryTree};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug)]
pub(crate) struct TreeNode<K, T> {
    pub(crate) key: K,
    pub(crate) tag: T,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) left: Option<NodeKey>,
    pub(crate) right: Option<NodeKey>,
}

pub(crate) struct LinkedTree<K, C, T = ()> {
    pub(crate) nodes: NodeArena<TreeNode<K, T>>,
    pub(crate) root: Option<NodeKey>,
    pub(crate) cmp: C,
}

impl<K, C, T> LinkedTree<K, C, T> {
    pub(crate) fn new(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            root: None,
            cmp,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes[node].parent
    }

    #[inline]
    pub(crate) fn is_left_child(&self, node: NodeKey, parent: NodeKey) -> bool {
        self.nodes[parent].left == Some(node)
    }

    pub(crate) fn subtree_minimum(&self, mut node: NodeKey) -> NodeKey {
        while let Some(left) = self.nodes[node].left {
            node = left;
        }
        node
    }

    pub(crate) fn subtree_maximum(&self, mut node: NodeKey) -> NodeKey {
        while let Some(right) = self.nodes[node].right {
            node = right;
        }
        node
    }

    pub(crate) fn minimum(&self) -> Option<&K> {
        self.root.map(|r| &self.nodes[self.subtree_minimum(r)].key)
    }

    pub(crate) fn maximum(&self) -> Option<&K> {
        self.root.map(|r| &self.nodes[self.subtree_maximum(r)].key)
    }

    /// Points `old`'s parent (or the root) at `new` and sets `new`'s parent
    pub(crate) fn replace_in_parent(&mut self, old: NodeKey, new: Option<NodeKey>) {
        let parent = self.nodes[old].parent;
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.nodes[p].left == Some(old) {
                    self.nodes[p].left = new;
                } else {
                    self.nodes[p].right = new;
                }
            }
        }
        if let Some(n) = new {
            self.nodes[n].parent = parent;
        }
    }

    /// Rotates `x` down to the left; its right child takes its place
    ///
    /// ```text
    ///     x                             y
    ///    / \                           / \
    ///   a   y   -> rotate_left(x) ->  x   c
    ///      / \                       / \
    ///     b   c                     a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, x: NodeKey) {
        let Some(y) = self.nodes[x].right else {
            return;
        };
        let b = self.nodes[y].left;
        self.nodes[x].right = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }
        self.replace_in_parent(x, Some(y));
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left)
    pub(crate) fn rotate_right(&mut self, x: NodeKey) {
        let Some(y) = self.nodes[x].left else {
            return;
        };
        let b = self.nodes[y].right;
        self.nodes[x].left = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }
        self.replace_in_parent(x, Some(y));
        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Unlinks a node with at most one child and frees it
    pub(crate) fn splice_out(&mut self, node: NodeKey) -> TreeNode<K, T> {
        let child = self.nodes[node].left.or(self.nodes[node].right);
        self.replace_in_parent(node, child);
        match self.nodes.remove(node) {
            Some(removed) => removed,
            None => unreachable!("spliced node must be live"),
        }
    }

    /// The node physically unlinked when removing `node`: `node` itself, or
    /// its in-order successor when it has two children
    pub(crate) fn removal_target(&self, node: NodeKey) -> NodeKey {
        match (self.nodes[node].left, self.nodes[node].right) {
            (Some(_), Some(right)) => self.subtree_minimum(right),
            _ => node,
        }
    }

    /// Removes `node` with the successor-key copy, returning the unlinked node
    /// (whose `key` is the removed key and whose `parent` is where the
    /// hole opened)
    pub(crate) fn remove_node(&mut self, node: NodeKey) -> TreeNode<K, T> {
        let spliced = self.removal_target(node);
        let mut removed = self.splice_out(spliced);
        if spliced != node {
            std::mem::swap(&mut self.nodes[node].key, &mut removed.key);
        }
        removed
    }
}

impl<K, C: Compare<K>, T> LinkedTree<K, C, T> {
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeKey> {
        let mut current = self.root;
        while let Some(n) = current {
            current = match self.cmp.compare(key, &self.nodes[n].key) {
                Ordering::Less => self.nodes[n].left,
                Ordering::Greater => self.nodes[n].right,
                Ordering::Equal => return Some(n),
            };
        }
        None
    }

    /// Attaches `key` as a leaf where plain BST descent ends
    ///
    /// Returns `None`, leaving the tree unchanged, if an equal key exists.
    pub(crate) fn attach_leaf(&mut self, key: K, tag: T) -> Option<NodeKey> {
        let mut parent = None;
        let mut go_left = false;
        let mut current = self.root;
        while let Some(n) = current {
            parent = Some(n);
            match self.cmp.compare(&key, &self.nodes[n].key) {
                Ordering::Less => {
                    go_left = true;
                    current = self.nodes[n].left;
                }
                Ordering::Greater => {
                    go_left = false;
                    current = self.nodes[n].right;
                }
                Ordering::Equal => return None,
            }
        }

        let node = self.nodes.insert(TreeNode {
            key,
            tag,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(node),
            Some(p) if go_left => self.nodes[p].left = Some(node),
            Some(p) => self.nodes[p].right = Some(node),
        }
        Some(node)
    }

    /// Checks strict key order, parent links and the node count
    ///
    /// Walks with an explicit stack, so list-shaped trees are fine.
    pub(crate) fn verify_order(&self) -> bool {
        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return false;
            }
        }
        let mut count = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, None::<&K>, None::<&K>));
        }
        while let Some((n, lower, upper)) = stack.pop() {
            count += 1;
            let node = &self.nodes[n];
            if lower.is_some_and(|lo| !self.cmp.less(lo, &node.key))
                || upper.is_some_and(|hi| !self.cmp.less(&node.key, hi))
            {
                return false;
            }
            if let Some(left) = node.left {
                if self.nodes[left].parent != Some(n) {
                    return false;
                }
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right {
                if self.nodes[right].parent != Some(n) {
                    return false;
                }
                stack.push((right, Some(&node.key), upper));
            }
        }
        count == self.nodes.len()
    }
}

impl<K, C, T> BinaryTree for LinkedTree<K, C, T> {
    type Key = K;

    fn root(&self) -> Option<NodeKey> {
        self.root
    }

    fn left(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes[node].left
    }

    fn right(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes[node].right
    }

    fn key(&self, node: NodeKey) -> &K {
        &self.nodes[node].key
    }
}

impl<K: fmt::Debug, C, T> fmt::Debug for LinkedTree<K, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        traversal::traverse_in_order(self, |k| {
            set.entry(k);
        });
        set.finish()
    }
}

/// Implements `BinaryTree`, `Default`, `Extend`, `FromIterator` and `Debug`
/// for a set type wrapping a `LinkedTree` in its `tree` field
macro_rules! linked_tree_set_impls {
    ($set:ident) => {
        impl<K, C> $crate::traversal::BinaryTree for $set<K, C> {
            type Key = K;

            fn root(&self) -> Option<$crate::storage::NodeKey> {
                self.tree.root
            }

            fn left(&self, node: $crate::storage::NodeKey) -> Option<$crate::storage::NodeKey> {
                self.tree.nodes[node].left
            }

            fn right(&self, node: $crate::storage::NodeKey) -> Option<$crate::storage::NodeKey> {
                self.tree.nodes[node].right
            }

            fn key(&self, node: $crate::storage::NodeKey) -> &K {
                &self.tree.nodes[node].key
            }
        }

        impl<K, C: $crate::compare::Compare<K> + Default> Default for $set<K, C> {
            fn default() -> Self {
                Self::with_comparator(C::default())
            }
        }

        impl<K, C: $crate::compare::Compare<K>> Extend<K> for $set<K, C> {
            fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
                for key in iter {
                    $crate::traits::OrderedSet::add(self, key);
                }
            }
        }

        impl<K, C: $crate::compare::Compare<K> + Default> FromIterator<K> for $set<K, C> {
            fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
                let mut set = Self::with_comparator(C::default());
                set.extend(iter);
                set
            }
        }

        impl<K: std::fmt::Debug, C> std::fmt::Debug for $set<K, C> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(&self.tree, f)
            }
        }
    };
}

pub(crate) use linked_tree_set_impls;
