//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with at most one tree of
//! each degree, much like the binary representation of its size.
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and its root has children of degrees k-1, …, 0
//!
//! The roots form a singly linked sibling list sorted by strictly increasing
//! degree, starting at `head`. Every mutating operation funnels into one
//! union step:
//!
//! - **Union**: merge both root lists by degree, then walk the merged list
//!   linking adjacent roots of equal degree (carry propagation)
//! - **Insert**: union with a one-node heap
//! - **Extract-min**: unlink the minimum root, reverse its children into a
//!   root list of their own, and union that back in
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `extract_minimum` | O(log n)   |
//! | `find_minimum`    | O(log n)   |
//! | `union`           | O(log n) links, plus O(m) to move the donor's nodes |
//!
//! `find_minimum` scans the root list rather than caching the minimum.

use crate::compare::{Compare, Natural};
use crate::storage::{NodeArena, NodeKey, Relink, Ticket};
use crate::traits::{Handle, Heap};
use std::fmt;

/// Handle to an element in a [`BinomialHeap`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BinomialHandle(Ticket);

impl Handle for BinomialHandle {}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Number of children
    degree: usize,
    parent: Option<NodeKey>,
    /// Leftmost child (highest degree)
    child: Option<NodeKey>,
    /// Next root, or next child of the same parent
    sibling: Option<NodeKey>,
}

impl<K, V> Relink for Node<K, V> {
    fn relink(&mut self, map: impl Fn(NodeKey) -> NodeKey) {
        self.parent = self.parent.map(&map);
        self.child = self.child.map(&map);
        self.sibling = self.sibling.map(&map);
    }
}

/// Binomial min-heap
pub struct BinomialHeap<K, V, C = Natural> {
    nodes: NodeArena<Node<K, V>>,
    head: Option<NodeKey>,
    node_count: usize,
    cmp: C,
}

impl<K: Ord, V> BinomialHeap<K, V> {
    /// Creates an empty heap in natural key order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C: Compare<K>> BinomialHeap<K, V, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            node_count: 0,
            cmp,
        }
    }

    /// Degrees of the roots, in root-list order
    pub fn root_degrees(&self) -> Vec<usize> {
        self.roots().map(|r| self.nodes[r].degree).collect()
    }

    fn roots(&self) -> impl Iterator<Item = NodeKey> + '_ {
        std::iter::successors(self.head, move |&r| self.nodes[r].sibling)
    }

    #[inline]
    fn less(&self, a: NodeKey, b: NodeKey) -> bool {
        self.cmp.less(&self.nodes[a].key, &self.nodes[b].key)
    }

    /// Root holding the minimum key, with the root before it in the list
    fn minimum_root(&self) -> Option<(Option<NodeKey>, NodeKey)> {
        let mut best = (None, self.head?);
        let mut prev = best.1;
        while let Some(next) = self.nodes[prev].sibling {
            if self.less(next, best.1) {
                best = (Some(prev), next);
            }
            prev = next;
        }
        Some(best)
    }

    /// Makes `child` the leftmost child of `parent`; both must be roots of
    /// equal degree
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        self.nodes[child].parent = Some(parent);
        self.nodes[child].sibling = self.nodes[parent].child;
        self.nodes[parent].child = Some(child);
        self.nodes[parent].degree += 1;
    }

    /// Interleaves two degree-sorted root lists into one
    fn merge_root_lists(
        &mut self,
        mut a: Option<NodeKey>,
        mut b: Option<NodeKey>,
    ) -> Option<NodeKey> {
        let mut head = None;
        let mut tail: Option<NodeKey> = None;
        loop {
            let next = match (a, b) {
                (None, None) => break,
                (Some(x), None) | (None, Some(x)) => {
                    // Append the rest in one step
                    match tail {
                        None => head = Some(x),
                        Some(t) => self.nodes[t].sibling = Some(x),
                    }
                    return head;
                }
                (Some(x), Some(y)) => {
                    if self.nodes[x].degree <= self.nodes[y].degree {
                        a = self.nodes[x].sibling;
                        x
                    } else {
                        b = self.nodes[y].sibling;
                        y
                    }
                }
            };
            match tail {
                None => head = Some(next),
                Some(t) => self.nodes[t].sibling = Some(next),
            }
            tail = Some(next);
        }
        head
    }

    /// Unions a root list whose nodes already live in this arena
    fn union_roots(&mut self, other: Option<NodeKey>) {
        let head = self.head.take();
        let Some(mut new_head) = self.merge_root_lists(head, other) else {
            return;
        };

        let mut prev: Option<NodeKey> = None;
        let mut curr = new_head;
        while let Some(next) = self.nodes[curr].sibling {
            let next_sibling = self.nodes[next].sibling;
            let degree = self.nodes[curr].degree;
            if degree != self.nodes[next].degree
                || next_sibling.is_some_and(|s| self.nodes[s].degree == degree)
            {
                prev = Some(curr);
                curr = next;
            } else if self.less(curr, next) {
                self.nodes[curr].sibling = next_sibling;
                self.link(next, curr);
            } else {
                match prev {
                    None => new_head = next,
                    Some(p) => self.nodes[p].sibling = Some(next),
                }
                self.link(curr, next);
                curr = next;
            }
        }
        self.head = Some(new_head);
    }

    /// Checks the structural invariants of the forest
    ///
    /// Root degrees strictly increase along the root list, every tree of
    /// degree `d` holds `2^d` nodes with children of degrees `d-1 … 0`, no
    /// child orders before its parent, and the node count matches.
    pub fn verify_invariants(&self) -> bool {
        let mut total = 0;
        let mut last_degree = None;
        for root in self.roots() {
            let node = &self.nodes[root];
            if node.parent.is_some() || last_degree.is_some_and(|d| d >= node.degree) {
                return false;
            }
            last_degree = Some(node.degree);
            match self.verify_tree(root) {
                Some(size) => total += size,
                None => return false,
            }
        }
        total == self.node_count && total == self.nodes.len()
    }

    /// Returns the subtree size if the binomial tree rooted at `node` is well formed
    fn verify_tree(&self, node: NodeKey) -> Option<usize> {
        let degree = self.nodes[node].degree;
        let mut size = 1;
        let mut expected = degree;
        let mut child = self.nodes[node].child;
        while let Some(c) = child {
            if expected == 0
                || self.nodes[c].degree != expected - 1
                || self.nodes[c].parent != Some(node)
                || self.less(c, node)
            {
                return None;
            }
            expected -= 1;
            size += self.verify_tree(c)?;
            child = self.nodes[c].sibling;
        }
        (expected == 0 && size == 1 << degree).then_some(size)
    }
}

impl<K, V, C: Compare<K>> Heap<K, V> for BinomialHeap<K, V, C> {
    type Handle = BinomialHandle;

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.node_count
    }

    fn insert(&mut self, key: K, value: V) -> Self::Handle {
        let node = self.nodes.insert(Node {
            key,
            value,
            degree: 0,
            parent: None,
            child: None,
            sibling: None,
        });
        self.node_count += 1;
        self.union_roots(Some(node));
        BinomialHandle(self.nodes.ticket(node))
    }

    fn find_minimum(&self) -> Option<(&K, &V)> {
        let (_, min) = self.minimum_root()?;
        let node = &self.nodes[min];
        Some((&node.key, &node.value))
    }

    fn extract_minimum(&mut self) -> Option<(K, V)> {
        let (prev, min) = self.minimum_root()?;
        let rest = self.nodes[min].sibling;
        match prev {
            None => self.head = rest,
            Some(p) => self.nodes[p].sibling = rest,
        }

        // Children run from highest to lowest degree; reverse them into a
        // degree-ascending root list
        let mut reversed = None;
        let mut child = self.nodes[min].child;
        while let Some(c) = child {
            child = self.nodes[c].sibling;
            self.nodes[c].sibling = reversed;
            self.nodes[c].parent = None;
            reversed = Some(c);
        }

        let removed = self.nodes.remove(min)?;
        self.node_count -= 1;
        self.union_roots(reversed);
        Some((removed.key, removed.value))
    }

    /// Moves every element of `other` into `self`
    ///
    /// Handles issued by `other` do not carry over: its nodes receive new
    /// keys in this heap's storage, unless `self` was empty, in which case
    /// the storage (and its arena id) is swapped wholesale. Stale handles
    /// of `self` never resolve to the adopted nodes.
    fn union(&mut self, other: &mut Self) {
        let other_head = if self.nodes.is_empty() {
            std::mem::swap(&mut self.nodes, &mut other.nodes);
            other.head.take()
        } else {
            let moved = self.nodes.absorb(&mut other.nodes);
            other.head.take().map(|h| moved[h])
        };
        self.node_count += std::mem::take(&mut other.node_count);
        self.union_roots(other_head);
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.node_count = 0;
    }

    fn get(&self, handle: &Self::Handle) -> Option<(&K, &V)> {
        self.nodes.resolve(handle.0).map(|n| {
            let node = &self.nodes[n];
            (&node.key, &node.value)
        })
    }
}

impl<K, V, C: Compare<K> + Default> Default for BinomialHeap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for BinomialHeap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for BinomialHeap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

impl<K: fmt::Debug, V, C> fmt::Debug for BinomialHeap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<_> = std::iter::successors(self.head, |&r| self.nodes[r].sibling)
            .map(|r| (&self.nodes[r].key, self.nodes[r].degree))
            .collect();
        f.debug_struct("BinomialHeap")
            .field("len", &self.node_count)
            .field("roots", &roots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = BinomialHeap::new();
        assert!(heap.is_empty());

        heap.insert(5, "five");
        heap.insert(3, "three");
        heap.insert(7, "seven");

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.find_minimum(), Some((&3, &"three")));
        assert_eq!(heap.extract_minimum(), Some((3, "three")));
        assert_eq!(heap.extract_minimum(), Some((5, "five")));
        assert_eq!(heap.extract_minimum(), Some((7, "seven")));
        assert_eq!(heap.extract_minimum(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_negative_keys() {
        let mut heap: BinomialHeap<i32, ()> =
            [-9, 6, 3, 10, -4].into_iter().map(|k| (k, ())).collect();
        let drained: Vec<_> = std::iter::from_fn(|| heap.extract_minimum())
            .map(|(k, _)| k)
            .collect();
        assert_eq!(drained, vec![-9, -4, 3, 6, 10]);
    }

    #[test]
    fn test_root_degrees_follow_binary_representation() {
        let mut heap = BinomialHeap::new();
        for k in 0..13 {
            heap.insert(k, ());
            assert!(heap.verify_invariants());
        }
        // 13 = 0b1101
        assert_eq!(heap.root_degrees(), vec![0, 2, 3]);

        heap.insert(13, ());
        // 14 = 0b1110
        assert_eq!(heap.root_degrees(), vec![1, 2, 3]);

        heap.extract_minimum();
        assert_eq!(heap.root_degrees(), vec![0, 2, 3]);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_extract_keeps_invariants() {
        let mut heap = BinomialHeap::new();
        for k in [15, 3, 9, 21, 1, 7, 12, 30, 4, 18, 2] {
            heap.insert(k, k * 2);
        }
        let mut last = i32::MIN;
        while let Some((k, v)) = heap.extract_minimum() {
            assert!(k >= last);
            assert_eq!(v, k * 2);
            assert!(heap.verify_invariants());
            last = k;
        }
    }

    #[test]
    fn test_duplicate_keys() {
        let mut heap = BinomialHeap::new();
        for v in 0..6 {
            heap.insert(1, v);
        }
        heap.insert(0, 100);
        assert_eq!(heap.extract_minimum(), Some((0, 100)));
        for _ in 0..6 {
            assert_eq!(heap.extract_minimum().map(|(k, _)| k), Some(1));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_handle_tracks_element_until_extracted() {
        let mut heap = BinomialHeap::new();
        let a = heap.insert(2, 'a');
        let b = heap.insert(1, 'b');
        assert_eq!(heap.get(&a), Some((&2, &'a')));
        assert_eq!(heap.extract_minimum(), Some((1, 'b')));
        assert_eq!(heap.get(&b), None);
        assert_eq!(heap.get(&a), Some((&2, &'a')));
    }

    #[test]
    fn test_union() {
        let mut heap1 = BinomialHeap::new();
        let mut heap2 = BinomialHeap::new();
        for k in [1, 4, 7, 10, 13] {
            heap1.insert(k, ());
        }
        for k in [2, 5, 8, 11, 14, 3, 6] {
            heap2.insert(k, ());
        }

        heap1.union(&mut heap2);
        assert!(heap2.is_empty());
        assert_eq!(heap2.len(), 0);
        assert_eq!(heap1.len(), 12);
        assert!(heap1.verify_invariants());

        let drained: Vec<_> = std::iter::from_fn(|| heap1.extract_minimum())
            .map(|(k, _)| k)
            .collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 13, 14]);
    }

    #[test]
    fn test_union_into_empty_keeps_handles() {
        let mut empty = BinomialHeap::new();
        let mut donor = BinomialHeap::new();
        let h = donor.insert(42, "x");
        donor.insert(43, "y");

        empty.union(&mut donor);
        assert!(donor.is_empty());
        assert_eq!(empty.get(&h), Some((&42, &"x")));
        assert!(empty.verify_invariants());

        // Donor stays usable after giving its contents away
        donor.insert(1, "z");
        assert_eq!(donor.find_minimum(), Some((&1, &"z")));
    }

    #[test]
    fn test_clear() {
        let mut heap = BinomialHeap::new();
        let h = heap.insert(1, ());
        heap.insert(2, ());
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.get(&h), None);
        assert_eq!(heap.find_minimum(), None);
    }

    #[test]
    fn test_max_heap_comparator() {
        let mut heap = BinomialHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for k in [3, 9, 1, 7] {
            heap.insert(k, ());
        }
        assert_eq!(heap.extract_minimum(), Some((9, ())));
        assert_eq!(heap.extract_minimum(), Some((7, ())));
    }
}
