//! Classic Ordered Collections for Rust
//!
//! This crate provides the textbook family of comparator-ordered trees and
//! priority queues, all built on one arena of generational node keys.
//!
//! # Features
//!
//! - **Binary Heap**: array-backed; O(log n) insert, extract-min and decrease_key; O(n) build
//! - **Binomial Heap**: forest of binomial trees; O(log n) insert, extract-min and union
//! - **Fibonacci Heap**: O(1) amortized insert, decrease_key and union; O(log n) amortized extract-min
//! - **Binary Search Tree**: unbalanced baseline
//! - **Red-Black Tree**: O(log n) worst-case add, contains and remove
//! - **Splay Tree**: O(log n) amortized access; every hit moves the key to the root
//!
//! Heaps implement [`Heap`] (and [`DecreaseKeyHeap`] where supported); trees
//! implement [`OrderedSet`] and share the walks in [`traversal`]. Every
//! structure takes a [`Compare`] at construction and defaults to [`Natural`].
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::fibonacci::FibonacciHeap;
//! use rust_classic_collections::{DecreaseKeyHeap, Heap};
//!
//! let mut heap = FibonacciHeap::new();
//! let handle1 = heap.insert(5, "item1");
//! let _handle2 = heap.insert(3, "item2");
//! heap.decrease_key(&handle1, 1).unwrap();
//! assert_eq!(heap.find_minimum(), Some((&1, &"item1")));
//! ```

pub mod binary_heap;
pub mod binary_search_tree;
pub mod binomial;
pub mod compare;
pub mod error;
pub mod fibonacci;
mod linked_tree;
pub mod red_black_tree;
pub mod splay_tree;
pub mod stdlib_compat;
pub mod storage;
pub mod traits;
pub mod traversal;

// Re-export the main traits for convenience
pub use compare::{Compare, Natural};
pub use error::HeapError;
pub use traits::{DecreaseKeyHeap, Handle, Heap, OrderedSet};
pub use traversal::BinaryTree;
