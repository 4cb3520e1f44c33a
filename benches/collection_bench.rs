//! Collection Benchmarks
//!
//! Compares the heaps on insert/extract and decrease-key workloads, and the
//! trees on add/contains/remove workloads, over a few input sizes.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench collection_bench
//! ```
//!
//! Inputs come from a seeded `StdRng`, so runs are reproducible.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rust_classic_collections::binary_heap::BinaryHeap;
use rust_classic_collections::binary_search_tree::BinarySearchTree;
use rust_classic_collections::binomial::BinomialHeap;
use rust_classic_collections::fibonacci::FibonacciHeap;
use rust_classic_collections::red_black_tree::RedBlackTree;
use rust_classic_collections::splay_tree::SplayTree;
use rust_classic_collections::{DecreaseKeyHeap, Heap, OrderedSet};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled_keys(n: usize, seed: u64) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n as u32).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

fn insert_extract_all<H: Heap<u32, u32> + Default>(keys: &[u32]) -> u64 {
    let mut heap = H::default();
    for &k in keys {
        heap.insert(k, k);
    }
    let mut sum = 0u64;
    while let Some((k, _)) = heap.extract_minimum() {
        sum += k as u64;
    }
    sum
}

/// Dijkstra-shaped workload: every element gets one decrease before draining
fn decrease_then_drain<H: DecreaseKeyHeap<u32, u32> + Default>(keys: &[u32]) -> u64 {
    let mut heap = H::default();
    let handles: Vec<_> = keys.iter().map(|&k| heap.insert(k + 1_000_000, k)).collect();
    for (handle, &k) in handles.iter().zip(keys) {
        let _ = heap.decrease_key(handle, k);
    }
    let mut sum = 0u64;
    while let Some((k, _)) = heap.extract_minimum() {
        sum += k as u64;
    }
    sum
}

fn add_contains_remove<T: OrderedSet<u32> + Default>(keys: &[u32]) -> usize {
    let mut tree = T::default();
    for &k in keys {
        tree.add(k);
    }
    let mut hits = 0;
    for &k in keys.iter().rev() {
        if tree.contains(&k) {
            hits += 1;
        }
    }
    for &k in keys {
        tree.remove(&k);
    }
    hits
}

fn benchmark_heaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_insert_extract");
    for n in SIZES {
        let keys = shuffled_keys(n, 0xbe7c);
        group.bench_with_input(BenchmarkId::new("binary", n), &keys, |b, keys| {
            b.iter(|| black_box(insert_extract_all::<BinaryHeap<u32, u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("binomial", n), &keys, |b, keys| {
            b.iter(|| black_box(insert_extract_all::<BinomialHeap<u32, u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("fibonacci", n), &keys, |b, keys| {
            b.iter(|| black_box(insert_extract_all::<FibonacciHeap<u32, u32>>(keys)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("heap_decrease_key");
    for n in SIZES {
        let keys = shuffled_keys(n, 0xdec);
        group.bench_with_input(BenchmarkId::new("binary", n), &keys, |b, keys| {
            b.iter(|| black_box(decrease_then_drain::<BinaryHeap<u32, u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("fibonacci", n), &keys, |b, keys| {
            b.iter(|| black_box(decrease_then_drain::<FibonacciHeap<u32, u32>>(keys)))
        });
    }
    group.finish();
}

fn benchmark_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_add_contains_remove");
    for n in SIZES {
        let keys = shuffled_keys(n, 0x7ee);
        group.bench_with_input(BenchmarkId::new("unbalanced", n), &keys, |b, keys| {
            b.iter(|| black_box(add_contains_remove::<BinarySearchTree<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("red_black", n), &keys, |b, keys| {
            b.iter(|| black_box(add_contains_remove::<RedBlackTree<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("splay", n), &keys, |b, keys| {
            b.iter(|| black_box(add_contains_remove::<SplayTree<u32>>(keys)))
        });
    }
    group.finish();

    // Sorted input: the unbalanced tree degenerates, so it is left out
    let mut group = c.benchmark_group("tree_sorted_input");
    for n in SIZES {
        let keys: Vec<u32> = (0..n as u32).collect();
        group.bench_with_input(BenchmarkId::new("red_black", n), &keys, |b, keys| {
            b.iter(|| black_box(add_contains_remove::<RedBlackTree<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("splay", n), &keys, |b, keys| {
            b.iter(|| black_box(add_contains_remove::<SplayTree<u32>>(keys)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_heaps, benchmark_trees);
criterion_main!(benches);
