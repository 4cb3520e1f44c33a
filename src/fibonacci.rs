//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert, decrease_key, and union
//! - O(log n) amortized extract_minimum and delete
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so is every sibling group of children.
//! The heap maintains a pointer to the minimum root.
//!
//! Work is deferred: insert and union only splice rings together, and trees
//! of equal degree are linked (consolidated) only when the minimum is
//! extracted. `decrease_key` cuts a node that now orders before its parent
//! into the root list; a parent that loses a second child is cut as well
//! (cascading cut), which the `marked` bit tracks.
//!
//! `len` walks the whole forest and is O(n).

use crate::compare::{Compare, Natural};
use crate::error::HeapError;
use crate::storage::{NodeArena, NodeKey, Relink, Ticket};
use crate::traits::{DecreaseKeyHeap, Handle, Heap};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Handle to an element in a [`FibonacciHeap`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FibonacciHandle(Ticket);

impl Handle for FibonacciHandle {}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    degree: usize,
    parent: Option<NodeKey>,
    /// Any one child; the rest are reached through its ring
    child: Option<NodeKey>,
    prev: NodeKey,
    next: NodeKey,
    /// Lost a child since it last became a child itself
    marked: bool,
    /// Orders before every other node; set only while `delete` runs
    forced_minimum: bool,
}

impl<K, V> Relink for Node<K, V> {
    fn relink(&mut self, map: impl Fn(NodeKey) -> NodeKey) {
        self.parent = self.parent.map(&map);
        self.child = self.child.map(&map);
        self.prev = map(self.prev);
        self.next = map(self.next);
    }
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use rust_classic_collections::fibonacci::FibonacciHeap;
/// use rust_classic_collections::{DecreaseKeyHeap, Heap};
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(5, "item");
/// heap.insert(3, "other");
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.find_minimum(), Some((&1, &"item")));
/// ```
pub struct FibonacciHeap<K, V, C = Natural> {
    nodes: NodeArena<Node<K, V>>,
    min: Option<NodeKey>,
    node_count: usize,
    cmp: C,
}

impl<K: Ord, V> FibonacciHeap<K, V> {
    /// Creates an empty heap in natural key order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C: Compare<K>> FibonacciHeap<K, V, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            min: None,
            node_count: 0,
            cmp,
        }
    }

    /// Node order: a forced minimum precedes everything, otherwise keys decide
    fn precedes(&self, a: NodeKey, b: NodeKey) -> bool {
        let (a, b) = (&self.nodes[a], &self.nodes[b]);
        match (a.forced_minimum, b.forced_minimum) {
            (true, false) => true,
            (false, true) => false,
            _ => self.cmp.less(&a.key, &b.key),
        }
    }

    /// Iterates one circular ring starting at `start`
    fn ring(&self, start: NodeKey) -> impl Iterator<Item = NodeKey> + '_ {
        let mut current = Some(start);
        std::iter::from_fn(move || {
            let node = current?;
            let next = self.nodes[node].next;
            current = (next != start).then_some(next);
            Some(node)
        })
    }

    /// Joins the ring containing `b` into the ring containing `a`, right after `a`
    fn splice(&mut self, a: NodeKey, b: NodeKey) {
        let a_next = self.nodes[a].next;
        let b_prev = self.nodes[b].prev;
        self.nodes[a].next = b;
        self.nodes[b].prev = a;
        self.nodes[b_prev].next = a_next;
        self.nodes[a_next].prev = b_prev;
    }

    /// Merges two rings and returns whichever head orders first
    fn merge_lists(&mut self, a: Option<NodeKey>, b: Option<NodeKey>) -> Option<NodeKey> {
        match (a, b) {
            (None, x) | (x, None) => x,
            (Some(a), Some(b)) => {
                self.splice(a, b);
                Some(if self.precedes(b, a) { b } else { a })
            }
        }
    }

    /// Takes a node out of its ring, leaving it self-linked
    fn unlink(&mut self, node: NodeKey) {
        let (prev, next) = (self.nodes[node].prev, self.nodes[node].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[node].prev = node;
        self.nodes[node].next = node;
    }

    /// Makes root `child` a child of root `parent`
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        self.unlink(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[child].marked = false;
        match self.nodes[parent].child {
            None => self.nodes[parent].child = Some(child),
            Some(c) => self.splice(c, child),
        }
        self.nodes[parent].degree += 1;
    }

    /// Links roots of equal degree until every root degree is distinct,
    /// then recomputes the minimum
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };
        let roots: Vec<NodeKey> = self.ring(start).collect();
        let mut degree_table: SmallVec<[Option<NodeKey>; 64]> = SmallVec::new();

        for root in roots {
            let mut x = root;
            let mut d = self.nodes[x].degree;
            loop {
                if d >= degree_table.len() {
                    degree_table.resize(d + 1, None);
                }
                let Some(mut y) = degree_table[d].take() else {
                    break;
                };
                if self.precedes(y, x) {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }
            degree_table[d] = Some(x);
        }

        self.min = degree_table
            .into_iter()
            .flatten()
            .reduce(|best, root| if self.precedes(root, best) { root } else { best });
    }

    /// Moves `node` from its parent's child ring to the root list
    fn cut(&mut self, node: NodeKey, parent: NodeKey) {
        if self.nodes[parent].child == Some(node) {
            let next = self.nodes[node].next;
            self.nodes[parent].child = (next != node).then_some(next);
        }
        self.unlink(node);
        self.nodes[parent].degree -= 1;
        self.nodes[node].parent = None;
        self.nodes[node].marked = false;
        if let Some(min) = self.min {
            self.splice(min, node);
        }
    }

    /// Marks `node`, or cuts it if it was already marked and carries on upward
    fn cascading_cut(&mut self, node: NodeKey) {
        let mut current = node;
        while let Some(parent) = self.nodes[current].parent {
            if !self.nodes[current].marked {
                self.nodes[current].marked = true;
                return;
            }
            self.cut(current, parent);
            current = parent;
        }
    }

    /// Checks ring links, parent pointers, degrees, heap order and the minimum
    pub fn verify_invariants(&self) -> bool {
        let Some(min) = self.min else {
            return self.nodes.is_empty() && self.node_count == 0;
        };
        let mut count = 0;
        let mut stack: Vec<(NodeKey, Option<NodeKey>)> = vec![(min, None)];
        while let Some((start, parent)) = stack.pop() {
            let mut siblings = 0;
            for node in self.ring(start) {
                count += 1;
                siblings += 1;
                if count > self.nodes.len() {
                    return false;
                }
                let n = &self.nodes[node];
                if self.nodes[n.next].prev != node || n.parent != parent || n.forced_minimum {
                    return false;
                }
                let bound = parent.unwrap_or(min);
                if self.precedes(node, bound) {
                    return false;
                }
                match n.child {
                    Some(child) => stack.push((child, Some(node))),
                    None if n.degree != 0 => return false,
                    None => {}
                }
            }
            if parent.is_some_and(|p| self.nodes[p].degree != siblings) {
                return false;
            }
        }
        count == self.nodes.len() && count == self.node_count
    }
}

impl<K, V, C: Compare<K>> Heap<K, V> for FibonacciHeap<K, V, C> {
    type Handle = FibonacciHandle;

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Counts every node by walking the forest
    fn len(&self) -> usize {
        let Some(min) = self.min else {
            return 0;
        };
        let mut count = 0;
        let mut stack = vec![min];
        while let Some(start) = stack.pop() {
            for node in self.ring(start) {
                count += 1;
                if let Some(child) = self.nodes[node].child {
                    stack.push(child);
                }
            }
        }
        count
    }

    fn insert(&mut self, key: K, value: V) -> Self::Handle {
        let node = self.nodes.insert_with_key(|k| Node {
            key,
            value,
            degree: 0,
            parent: None,
            child: None,
            prev: k,
            next: k,
            marked: false,
            forced_minimum: false,
        });
        self.min = self.merge_lists(self.min, Some(node));
        self.node_count += 1;
        FibonacciHandle(self.nodes.ticket(node))
    }

    fn find_minimum(&self) -> Option<(&K, &V)> {
        self.min.map(|m| {
            let node = &self.nodes[m];
            (&node.key, &node.value)
        })
    }

    fn extract_minimum(&mut self) -> Option<(K, V)> {
        let z = self.min?;

        if let Some(child) = self.nodes[z].child.take() {
            let children: Vec<NodeKey> = self.ring(child).collect();
            for c in children {
                self.nodes[c].parent = None;
                self.nodes[c].marked = false;
            }
            self.splice(z, child);
        }

        let next = self.nodes[z].next;
        self.unlink(z);
        let removed = self.nodes.remove(z)?;
        self.node_count -= 1;

        if next == z {
            self.min = None;
        } else {
            self.min = Some(next);
            self.consolidate();
        }
        Some((removed.key, removed.value))
    }

    /// Splices `other`'s root list into this one
    ///
    /// Handles issued by `other` do not carry over unless `self` was empty,
    /// in which case the storage (and its arena id) is swapped wholesale.
    /// Stale handles of `self` never resolve to the adopted nodes.
    fn union(&mut self, other: &mut Self) {
        let other_min = if self.nodes.is_empty() {
            std::mem::swap(&mut self.nodes, &mut other.nodes);
            other.min.take()
        } else {
            let moved = self.nodes.absorb(&mut other.nodes);
            other.min.take().map(|m| moved[m])
        };
        self.min = self.merge_lists(self.min, other_min);
        self.node_count += std::mem::take(&mut other.node_count);
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
        self.node_count = 0;
    }

    fn get(&self, handle: &Self::Handle) -> Option<(&K, &V)> {
        self.nodes.resolve(handle.0).map(|n| {
            let node = &self.nodes[n];
            (&node.key, &node.value)
        })
    }
}

impl<K, V, C: Compare<K>> DecreaseKeyHeap<K, V> for FibonacciHeap<K, V, C> {
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError> {
        let node = self.nodes.resolve(handle.0).ok_or(HeapError::InvalidHandle)?;
        let entry = &mut self.nodes[node];
        if self.cmp.compare(&new_key, &entry.key) == Ordering::Greater {
            return Err(HeapError::KeyNotDecreased);
        }
        entry.key = new_key;
        let parent = entry.parent;

        if let Some(parent) = parent {
            if self.precedes(node, parent) {
                self.cut(node, parent);
                self.cascading_cut(parent);
            }
        }
        if self.min.is_some_and(|m| self.precedes(node, m)) {
            self.min = Some(node);
        }
        Ok(())
    }

    /// Forces the node to the front of the order, moves it to the root list
    /// and extracts it
    fn delete(&mut self, handle: &Self::Handle) -> Result<(K, V), HeapError> {
        let node = self.nodes.resolve(handle.0).ok_or(HeapError::InvalidHandle)?;
        self.nodes[node].forced_minimum = true;
        let parent = self.nodes[node].parent;

        if let Some(parent) = parent {
            self.cut(node, parent);
            self.cascading_cut(parent);
        }
        self.min = Some(node);
        self.extract_minimum().ok_or(HeapError::InvalidHandle)
    }
}

impl<K, V, C: Compare<K> + Default> Default for FibonacciHeap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for FibonacciHeap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for FibonacciHeap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

impl<K: fmt::Debug, V, C> fmt::Debug for FibonacciHeap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.node_count)
            .field("min", &self.min.map(|m| &self.nodes[m].key))
            .finish()
    }
}
