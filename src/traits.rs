//! Common traits for the collections in this crate
//!
//! Heaps use a two-tier hierarchy:
//!
//! - [`Heap`]: insert, find/extract the minimum, union, clear
//! - [`DecreaseKeyHeap`]: adds handle-based `decrease_key` and `delete`
//!
//! Search trees share [`OrderedSet`]. Ordered traversal of the trees lives in
//! [`crate::traversal`].
//!
//! All heaps are min-heaps with respect to the comparator they were built with.

use crate::error::HeapError;
use std::fmt;
use std::hash::Hash;

/// A handle to an element in a heap
///
/// Handles are small copyable tickets returned by [`Heap::insert`]. They stay
/// valid until the element leaves the heap (extraction, deletion, `clear`, or
/// `union` into another heap), after which the heap reports them as invalid.
/// A handle is only meaningful for the heap instance that issued it.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// Elements are `(key, value)` pairs ordered by key.
///
/// # Example
///
/// ```rust
/// use rust_classic_collections::Heap;
/// use rust_classic_collections::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(3, "three");
/// heap.insert(1, "one");
/// heap.insert(2, "two");
///
/// assert_eq!(heap.find_minimum(), Some((&1, &"one")));
/// assert_eq!(heap.extract_minimum(), Some((1, "one")));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<K, V> {
    /// The handle type returned by `insert`
    type Handle: Handle;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key/value pair, returning a handle to the new node
    fn insert(&mut self, key: K, value: V) -> Self::Handle;

    /// Returns the minimum key and its value without removing them
    fn find_minimum(&self) -> Option<(&K, &V)>;

    /// Removes and returns the minimum key and its value
    ///
    /// Returns `None` on an empty heap.
    fn extract_minimum(&mut self) -> Option<(K, V)>;

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// Handles issued by `other` are invalidated, except where an
    /// implementation documents that it adopts `other`'s storage outright.
    /// Handles that were already stale in either heap stay invalid.
    fn union(&mut self, other: &mut Self);

    /// Removes every element. All outstanding handles become invalid.
    fn clear(&mut self);

    /// Reads the key and value behind a handle, or `None` if the element is gone
    fn get(&self, handle: &Self::Handle) -> Option<(&K, &V)>;

    /// Returns true while the element behind `handle` is still in the heap
    fn contains_handle(&self, handle: &Self::Handle) -> bool {
        self.get(handle).is_some()
    }
}

/// Extended heap trait with `decrease_key` and `delete`
///
/// # Example
///
/// ```rust
/// use rust_classic_collections::{DecreaseKeyHeap, Heap, HeapError};
/// use rust_classic_collections::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let a = heap.insert(10, "a");
/// heap.insert(7, "b");
///
/// heap.decrease_key(&a, 5).unwrap();
/// assert_eq!(heap.find_minimum(), Some((&5, &"a")));
///
/// // Increasing a key is rejected and leaves the heap untouched
/// assert_eq!(heap.decrease_key(&a, 50), Err(HeapError::KeyNotDecreased));
/// assert_eq!(heap.find_minimum(), Some((&5, &"a")));
/// ```
pub trait DecreaseKeyHeap<K, V>: Heap<K, V> {
    /// Lowers the key of the element behind `handle`
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element has left the heap
    /// - [`HeapError::KeyNotDecreased`] if `new_key` compares greater than the
    ///   current key (an equal key is accepted)
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Removes the element behind `handle`, returning its key and value
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the element has already left the heap
    fn delete(&mut self, handle: &Self::Handle) -> Result<(K, V), HeapError>;
}

/// Ordered set of unique keys backed by a binary search tree
///
/// `contains` takes `&mut self` because self-adjusting trees restructure on
/// every successful lookup.
///
/// # Example
///
/// ```rust
/// use rust_classic_collections::OrderedSet;
/// use rust_classic_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// assert!(tree.add(5));
/// assert!(!tree.add(5)); // duplicates are rejected
/// assert!(tree.contains(&5));
/// assert!(tree.remove(&5));
/// assert!(tree.is_empty());
/// ```
pub trait OrderedSet<K> {
    /// Adds a key. Returns false (and leaves the tree unchanged) if it exists.
    fn add(&mut self, key: K) -> bool;

    /// Returns true if the key is present
    fn contains(&mut self, key: &K) -> bool;

    /// Removes a key. Returns false if it was absent.
    fn remove(&mut self, key: &K) -> bool;

    /// Smallest key, if any
    fn find_minimum(&self) -> Option<&K>;

    /// Largest key, if any
    fn find_maximum(&self) -> Option<&K>;

    /// Number of keys
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
