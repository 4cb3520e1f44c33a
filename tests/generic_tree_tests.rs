//! Generic tests for all ordered-set trees
//!
//! The helpers are written against `OrderedSet + BinaryTree` so that the
//! unbalanced, red-black and splay trees run the same scenarios.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_classic_collections::binary_search_tree::BinarySearchTree;
use rust_classic_collections::red_black_tree::RedBlackTree;
use rust_classic_collections::splay_tree::SplayTree;
use rust_classic_collections::traversal::{self, BinaryTree};
use rust_classic_collections::OrderedSet;
use std::collections::BTreeSet;

/// Keys inserted so that most trees come out balanced
const SEVEN: [i32; 7] = [6, 2, 10, 0, 4, 8, 12];

fn seven<T: OrderedSet<i32> + Default>() -> T {
    let mut tree = T::default();
    for k in SEVEN {
        assert!(tree.add(k));
    }
    tree
}

fn pre_order<T: BinaryTree<Key = i32>>(tree: &T) -> Vec<i32> {
    let mut out = Vec::new();
    traversal::traverse_pre_order(tree, |k| out.push(*k));
    out
}

fn in_order<T: BinaryTree<Key = i32>>(tree: &T) -> Vec<i32> {
    traversal::in_order_keys(tree).into_iter().copied().collect()
}

fn post_order<T: BinaryTree<Key = i32>>(tree: &T) -> Vec<i32> {
    let mut out = Vec::new();
    traversal::traverse_post_order(tree, |k| out.push(*k));
    out
}

fn test_add<T: OrderedSet<i32> + Default>() {
    let mut tree = T::default();
    assert!(tree.is_empty());
    assert!(tree.add(1));
    assert_eq!(tree.len(), 1);
    assert!(tree.add(2));
    assert!(tree.add(3));
    assert_eq!(tree.len(), 3);
    assert!(!tree.add(2));
    assert_eq!(tree.len(), 3);
}

fn test_remove_three<T: OrderedSet<i32> + Default>() {
    for first in [1, 2, 3] {
        let mut tree = T::default();
        tree.add(1);
        tree.add(2);
        tree.add(3);
        assert!(tree.remove(&first));
        assert!(!tree.contains(&first));
        assert_eq!(tree.len(), 2);
        assert!(!tree.remove(&4));
    }
}

fn test_remove_all_orders<T: OrderedSet<i32> + Default>() {
    let mut tree: T = seven();
    for k in (0..=12).rev().step_by(2) {
        assert!(tree.remove(&k));
    }
    assert!(tree.is_empty());

    let mut tree: T = seven();
    for k in (0..=12).step_by(2) {
        assert!(tree.remove(&k));
    }
    assert!(tree.is_empty());

    let mut tree: T = seven();
    for i in (0..=12).step_by(2) {
        assert!(tree.remove(&((i + 6) % 14)));
    }
    assert!(tree.is_empty());
}

fn test_remove_absent<T: OrderedSet<i32> + Default>() {
    let mut tree = T::default();
    assert!(!tree.remove(&1));

    let mut tree: T = seven();
    for k in (-1..=13).step_by(2) {
        assert!(!tree.remove(&k));
    }
    assert!(!tree.remove(&-50));
    assert_eq!(tree.len(), 7);
}

fn test_contains<T: OrderedSet<i32> + Default>() {
    let mut tree = T::default();
    assert!(!tree.contains(&1));

    tree.add(1);
    assert!(tree.contains(&1));
    assert!(!tree.contains(&2));

    let mut tree: T = seven();
    for k in SEVEN {
        assert!(tree.contains(&k));
    }
    for k in (-1..=13).step_by(2) {
        assert!(!tree.contains(&k));
    }
}

fn test_extremes<T: OrderedSet<i32> + Default>() {
    let mut tree = T::default();
    assert_eq!(tree.find_minimum(), None);
    assert_eq!(tree.find_maximum(), None);

    tree.add(5);
    assert_eq!(tree.find_minimum(), Some(&5));
    assert_eq!(tree.find_maximum(), Some(&5));

    for k in [3, 9, -2, 7] {
        tree.add(k);
    }
    assert_eq!(tree.find_minimum(), Some(&-2));
    assert_eq!(tree.find_maximum(), Some(&9));
}

fn test_traversals<T: OrderedSet<i32> + BinaryTree<Key = i32> + Default>() {
    let tree = T::default();
    assert!(pre_order(&tree).is_empty());
    assert!(in_order(&tree).is_empty());
    assert!(post_order(&tree).is_empty());

    let mut tree = T::default();
    tree.add(1);
    assert_eq!(pre_order(&tree), vec![1]);
    assert_eq!(in_order(&tree), vec![1]);
    assert_eq!(post_order(&tree), vec![1]);

    let mut tree = T::default();
    for k in [2, 1, 3] {
        tree.add(k);
    }
    let mut pre = pre_order(&tree);
    let mut post = post_order(&tree);
    pre.sort();
    post.sort();
    assert_eq!(pre, vec![1, 2, 3]);
    assert_eq!(post, vec![1, 2, 3]);
    assert_eq!(in_order(&tree), vec![1, 2, 3]);
}

/// Pre-order visits a node before both subtrees, post-order after them
fn test_traversal_parent_positions<T: OrderedSet<i32> + BinaryTree<Key = i32> + Default>() {
    let tree: T = seven();
    let root = tree.root().map(|r| *tree.key(r));
    let pre = pre_order(&tree);
    let post = post_order(&tree);
    assert_eq!(pre.first().copied(), root);
    assert_eq!(post.last().copied(), root);
    assert_eq!(pre.len(), 7);
    assert_eq!(post.len(), 7);
}

/// `tree` must use a comparator consistent with the natural or reverse order
fn test_custom_compare<T: OrderedSet<i32> + BinaryTree<Key = i32>>(mut tree: T) {
    assert!(tree.add(4));
    assert!(tree.add(1));
    assert!(tree.add(3));
    assert!(!tree.add(4));
    assert!(tree.add(2));
    assert!(tree.remove(&4));
    assert!(!tree.remove(&4));
    assert!(tree.remove(&3));
    assert!(tree.remove(&1));
    assert!(tree.remove(&2));
    assert!(tree.is_empty());
}

/// Random adds and removes checked against `BTreeSet`
fn test_matches_model<T: OrderedSet<i32> + BinaryTree<Key = i32> + Default>() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = T::default();
    let mut model = BTreeSet::new();
    for _ in 0..3000 {
        let k = rng.gen_range(0..200);
        match rng.gen_range(0..3) {
            0 | 1 => assert_eq!(tree.add(k), model.insert(k)),
            _ => assert_eq!(tree.remove(&k), model.remove(&k)),
        }
        assert_eq!(tree.len(), model.len());
    }
    assert_eq!(in_order(&tree), model.iter().copied().collect::<Vec<_>>());
    assert_eq!(tree.find_minimum(), model.first());
    assert_eq!(tree.find_maximum(), model.last());
}

macro_rules! tree_tests {
    ($module:ident, $tree:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn add() {
                test_add::<$tree<i32>>();
            }

            #[test]
            fn remove_three() {
                test_remove_three::<$tree<i32>>();
            }

            #[test]
            fn remove_all_orders() {
                test_remove_all_orders::<$tree<i32>>();
            }

            #[test]
            fn remove_absent() {
                test_remove_absent::<$tree<i32>>();
            }

            #[test]
            fn contains() {
                test_contains::<$tree<i32>>();
            }

            #[test]
            fn extremes() {
                test_extremes::<$tree<i32>>();
            }

            #[test]
            fn traversals() {
                test_traversals::<$tree<i32>>();
            }

            #[test]
            fn traversal_parent_positions() {
                test_traversal_parent_positions::<$tree<i32>>();
            }

            #[test]
            fn natural_compare() {
                test_custom_compare($tree::with_comparator(|a: &i32, b: &i32| a.cmp(b)));
            }

            #[test]
            fn reverse_compare() {
                test_custom_compare($tree::with_comparator(|a: &i32, b: &i32| b.cmp(a)));
            }

            #[test]
            fn matches_model() {
                test_matches_model::<$tree<i32>>();
            }
        }
    };
}

tree_tests!(binary_search_tree, BinarySearchTree);
tree_tests!(red_black_tree, RedBlackTree);
tree_tests!(splay_tree, SplayTree);

#[test]
fn red_black_remove_scenario() {
    let mut tree = RedBlackTree::new();
    for k in [10, 20, 30, 15, 25, 5] {
        assert!(tree.add(k));
        assert!(tree.verify_invariants());
    }
    assert!(tree.remove(&10));
    assert!(tree.verify_invariants());
    assert!(!tree.contains(&10));
    for k in [20, 30, 15, 25, 5] {
        assert!(tree.contains(&k));
    }
    assert_eq!(in_order(&tree), vec![5, 15, 20, 25, 30]);
}

#[test]
fn unbalanced_tree_traversal_orders() {
    let tree: BinarySearchTree<i32> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
    assert_eq!(pre_order(&tree), vec![8, 3, 1, 6, 4, 7, 10, 14, 13]);
    assert_eq!(in_order(&tree), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(post_order(&tree), vec![1, 4, 7, 6, 3, 13, 14, 10, 8]);
}

#[test]
fn splay_contains_moves_key_to_root() {
    let mut tree: SplayTree<i32> = SEVEN.into_iter().collect();
    for k in [0, 12, 6, 4, 8] {
        assert!(tree.contains(&k));
        assert_eq!(tree.root_key(), Some(&k));
        assert!(tree.verify_invariants());
    }
}

#[test]
fn red_black_sorted_input_stays_shallow() {
    let tree: RedBlackTree<i32> = (0..1000).collect();
    assert!(tree.verify_invariants());

    fn height<T: BinaryTree>(tree: &T, node: Option<rust_classic_collections::storage::NodeKey>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + height(tree, tree.left(n)).max(height(tree, tree.right(n))),
        }
    }
    // 2 * log2(1001) < 20
    assert!(height(&tree, tree.root()) <= 20);
}
