//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped wrapper over any heap in
//! this crate.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<K>` to get max-heap behavior.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::stdlib_compat::StdHeap;
//! use rust_classic_collections::binary_heap::BinaryHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32, BinaryHeap<i32, ()>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::traits::Heap;
use std::marker::PhantomData;

/// A `BinaryHeap`-like API where the key itself is the element
///
/// # Type Parameters
/// - `K`: The element type
/// - `H`: The underlying heap (e.g. `FibonacciHeap<K, ()>`)
pub struct StdHeap<K, H: Heap<K, ()>> {
    heap: H,
    _phantom: PhantomData<K>,
}

impl<K, H: Heap<K, ()> + Default> StdHeap<K, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::default())
    }
}

impl<K, H: Heap<K, ()>> StdHeap<K, H> {
    /// Wraps an existing heap, e.g. one built with a custom comparator
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Returns the wrapped heap
    pub fn into_inner(self) -> H {
        self.heap
    }

    /// Returns true if the heap holds no items
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: K) {
        self.heap.insert(item, ());
    }

    /// Returns a reference to the smallest item without removing it
    pub fn peek(&self) -> Option<&K> {
        self.heap.find_minimum().map(|(key, _)| key)
    }

    /// Removes and returns the smallest item
    pub fn pop(&mut self) -> Option<K> {
        self.heap.extract_minimum().map(|(key, _)| key)
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<K, H: Heap<K, ()> + Default> Default for StdHeap<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, H: Heap<K, ()>> Extend<K> for StdHeap<K, H> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<K, H: Heap<K, ()> + Default> FromIterator<K> for StdHeap<K, H> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
