//! Binary Heap implementation
//!
//! An array-backed binary min-heap: the element at position `i` has its
//! children at `2i + 1` and `2i + 2`, and no child orders before its parent.
//!
//! Unlike `std::collections::BinaryHeap`, every element lives in a node that
//! records its current array position. `insert` returns a handle to that node,
//! so `decrease_key` and `delete` can find the element in O(1) and restore
//! order in O(log n).
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `extract_minimum` | O(log n)   |
//! | `find_minimum`    | O(1)       |
//! | `decrease_key`    | O(log n)   |
//! | `delete`          | O(log n)   |
//! | `build_heap`      | O(n)       |
//! | `union`           | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::{DecreaseKeyHeap, Heap};
//! use rust_classic_collections::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(3, "three");
//! let two = heap.insert(20, "two");
//! heap.insert(1, "one");
//!
//! heap.decrease_key(&two, 2).unwrap();
//! assert_eq!(heap.extract_minimum(), Some((1, "one")));
//! assert_eq!(heap.extract_minimum(), Some((2, "two")));
//! assert_eq!(heap.extract_minimum(), Some((3, "three")));
//! assert_eq!(heap.extract_minimum(), None);
//! ```

use crate::compare::{Compare, Natural};
use crate::error::HeapError;
use crate::storage::{NodeArena, NodeKey, Ticket};
use crate::traits::{DecreaseKeyHeap, Handle, Heap};
use std::cmp::Ordering;
use std::fmt;

/// Handle to an element in a [`BinaryHeap`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BinaryHeapHandle(Ticket);

impl Handle for BinaryHeapHandle {}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Current position in `list`; kept in sync on every swap
    index: usize,
}

/// A binary min-heap with index-tracking handles
pub struct BinaryHeap<K, V, C = Natural> {
    nodes: NodeArena<Node<K, V>>,
    /// Implicit binary tree of node keys
    list: Vec<NodeKey>,
    cmp: C,
}

impl<K: Ord, V> BinaryHeap<K, V> {
    /// Creates an empty heap in natural key order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C: Compare<K>> BinaryHeap<K, V, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            list: Vec::new(),
            cmp,
        }
    }

    /// Replaces the heap's contents with the given keys and values
    ///
    /// The pair at position `i` of the inputs becomes one element; the returned
    /// handles are in input order. Runs in O(n) using bottom-up heapify.
    ///
    /// # Errors
    /// [`HeapError::LengthMismatch`] if the arrays differ in length. The heap
    /// is left untouched in that case.
    pub fn build_heap(
        &mut self,
        keys: Vec<K>,
        values: Vec<V>,
    ) -> Result<Vec<BinaryHeapHandle>, HeapError> {
        if keys.len() != values.len() {
            return Err(HeapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        self.clear();
        let mut handles = Vec::with_capacity(keys.len());
        for (index, (key, value)) in keys.into_iter().zip(values).enumerate() {
            let node = self.nodes.insert(Node { key, value, index });
            self.list.push(node);
            handles.push(BinaryHeapHandle(self.nodes.ticket(node)));
        }
        self.rebuild();
        Ok(handles)
    }

    /// Position of the element behind `handle` in the backing array
    pub fn position(&self, handle: &BinaryHeapHandle) -> Option<usize> {
        self.nodes.resolve(handle.0).map(|n| self.nodes[n].index)
    }

    /// Checks heap order and that every node's recorded index is its position
    pub fn verify_invariants(&self) -> bool {
        if self.list.len() != self.nodes.len() {
            return false;
        }
        for (i, &node) in self.list.iter().enumerate() {
            if self.nodes.get(node).map(|n| n.index) != Some(i) {
                return false;
            }
            if i > 0 && self.less(i, Self::parent(i)) {
                return false;
            }
        }
        true
    }

    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp
            .less(&self.nodes[self.list[a]].key, &self.nodes[self.list[b]].key)
    }

    /// Swaps two array slots and updates both nodes' indices
    fn swap(&mut self, a: usize, b: usize) {
        self.list.swap(a, b);
        let (node_a, node_b) = (self.list[a], self.list[b]);
        self.nodes[node_a].index = a;
        self.nodes[node_b].index = b;
    }

    /// Move element at index up while it orders before its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent(index);
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.list.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Restores heap order over the whole array, bottom-up
    fn rebuild(&mut self) {
        for i in (0..self.list.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Detaches the last array slot and frees its node
    fn pop_last(&mut self) -> Option<(K, V)> {
        let node = self.list.pop()?;
        self.nodes.remove(node).map(|n| (n.key, n.value))
    }
}

impl<K, V, C: Compare<K>> Heap<K, V> for BinaryHeap<K, V, C> {
    type Handle = BinaryHeapHandle;

    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn insert(&mut self, key: K, value: V) -> Self::Handle {
        let index = self.list.len();
        let node = self.nodes.insert(Node { key, value, index });
        self.list.push(node);
        self.sift_up(index);
        BinaryHeapHandle(self.nodes.ticket(node))
    }

    fn find_minimum(&self) -> Option<(&K, &V)> {
        self.list.first().map(|&n| {
            let node = &self.nodes[n];
            (&node.key, &node.value)
        })
    }

    fn extract_minimum(&mut self) -> Option<(K, V)> {
        if self.list.is_empty() {
            return None;
        }
        let last = self.list.len() - 1;
        self.swap(0, last);
        let min = self.pop_last();
        if !self.list.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Concatenates both arrays and re-heapifies in O(n + m)
    fn union(&mut self, other: &mut Self) {
        for node in other.list.drain(..) {
            if let Some(Node { key, value, .. }) = other.nodes.remove(node) {
                let index = self.list.len();
                self.list.push(self.nodes.insert(Node { key, value, index }));
            }
        }
        other.nodes.clear();
        self.rebuild();
    }

    fn clear(&mut self) {
        self.list.clear();
        self.nodes.clear();
    }

    fn get(&self, handle: &Self::Handle) -> Option<(&K, &V)> {
        self.nodes.resolve(handle.0).map(|n| {
            let node = &self.nodes[n];
            (&node.key, &node.value)
        })
    }
}

impl<K, V, C: Compare<K>> DecreaseKeyHeap<K, V> for BinaryHeap<K, V, C> {
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError> {
        let node = self.nodes.resolve(handle.0).ok_or(HeapError::InvalidHandle)?;
        let node = &mut self.nodes[node];
        if self.cmp.compare(&new_key, &node.key) == Ordering::Greater {
            return Err(HeapError::KeyNotDecreased);
        }
        node.key = new_key;
        let index = node.index;
        self.sift_up(index);
        Ok(())
    }

    /// Bubbles the element all the way to the root regardless of its key, then
    /// extracts it
    fn delete(&mut self, handle: &Self::Handle) -> Result<(K, V), HeapError> {
        let mut index = self.position(handle).ok_or(HeapError::InvalidHandle)?;
        while index > 0 {
            let parent = Self::parent(index);
            self.swap(index, parent);
            index = parent;
        }
        self.extract_minimum().ok_or(HeapError::InvalidHandle)
    }
}

impl<K, V, C: Compare<K> + Default> Default for BinaryHeap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for BinaryHeap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for BinaryHeap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        for (key, value) in iter {
            let index = heap.list.len();
            let node = heap.nodes.insert(Node { key, value, index });
            heap.list.push(node);
        }
        heap.rebuild();
        heap
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BinaryHeap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.list.iter().map(|&n| {
                let node = &self.nodes[n];
                (&node.key, &node.value)
            }))
            .finish()
    }
}
