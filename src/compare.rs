//! Key comparators
//!
//! Every collection in this crate is ordered by a [`Compare`] implementation
//! supplied at construction time. The default, [`Natural`], uses the key's
//! [`Ord`] implementation; any `Fn(&K, &K) -> Ordering` closure can be used
//! instead.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::red_black_tree::RedBlackTree;
//! use rust_classic_collections::OrderedSet;
//!
//! // Order strings by length, then lexicographically
//! let mut tree = RedBlackTree::with_comparator(|a: &String, b: &String| {
//!     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
//! });
//! tree.add("ccc".to_string());
//! tree.add("a".to_string());
//! tree.add("bb".to_string());
//! assert_eq!(tree.find_minimum().map(String::as_str), Some("a"));
//! assert_eq!(tree.find_maximum().map(String::as_str), Some("ccc"));
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`
///
/// Implementations must be consistent: `compare(a, b)` returns the reverse of
/// `compare(b, a)`, and the relation must be transitive. Collections rely on
/// this to keep their ordering invariants.
pub trait Compare<K: ?Sized> {
    /// Compares two keys
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Natural ordering via [`Ord`]
///
/// Works for numbers and for strings (lexicographic order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert!(Natural.less(&-3, &0));
    }

    #[test]
    fn test_closure_comparator() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert!(reverse.less(&5, &4));
    }
}
