//! Error types for heap operations.

use thiserror::Error;

/// Errors reported by handle-based heap operations.
///
/// These are contract violations by the caller. Every operation that can
/// return one of these checks its inputs before touching the structure, so
/// the heap is unchanged when an error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The new key compares greater than the node's current key
    #[error("new key is larger than old key")]
    KeyNotDecreased,

    /// The handle no longer refers to a node in this heap
    #[error("cannot use handle of non-existent node")]
    InvalidHandle,

    /// `build_heap` was given key and value arrays of different lengths
    #[error("key array must be the same length as value array: {keys} keys, {values} values")]
    LengthMismatch { keys: usize, values: usize },
}
