use core::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use indexed_sum_tree::IndexedSumTree;

/// Size used for the benchmarks.
const SIZE: usize = 1000;


fn build(size: usize) -> IndexedSumTree<i64> {
    let mut tree = IndexedSumTree::new();
    for v in 1..=size as i64 {
        tree.insert(tree.len() + 1, v).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut rng = rng::Lcg::new(0xC0FFEE);

    c.bench_function("indexed_sum_tree_insert_tail_1000", |b| {
        b.iter_batched(
            || build(SIZE),
            |mut tree| {
                tree.insert(tree.len() + 1, 42).unwrap();
                black_box(&tree);
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("indexed_sum_tree_insert_random_1000", |b| {
        b.iter_batched(
            || (build(SIZE), rng.next_usize(SIZE) + 1),
            |(mut tree, pos)| {
                tree.insert(pos, 42).unwrap();
                black_box(&tree);
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_erase(c: &mut Criterion) {
    let mut rng = rng::Lcg::new(0xDEAD_BEEF);

    c.bench_function("indexed_sum_tree_erase_random_1000", |b| {
        b.iter_batched(
            || (build(SIZE), rng.next_usize(SIZE) + 1),
            |(mut tree, pos)| {
                tree.erase(pos).unwrap();
                black_box(&tree);
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_range_sum(c: &mut Criterion) {
    let mut rng = rng::Lcg::new(0xFACE_FEED);

    c.bench_function("indexed_sum_tree_range_sum_random_1000", |b| {
        b.iter_batched(
            || {
                let l = rng.next_usize(SIZE) + 1;
                let r = rng.next_usize(SIZE) + 1;
                (build(SIZE), l.min(r), l.max(r))
            },
            |(mut tree, l, r)| {
                let res = tree.sum(l, r).unwrap();
                black_box(res);
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_range_update(c: &mut Criterion) {
    let mut rng = rng::Lcg::new(0xFEED_FACE);

    c.bench_function("indexed_sum_tree_range_update_1000", |b| {
        b.iter_batched(
            || {
                let l = rng.next_usize(SIZE) + 1;
                let r = rng.next_usize(SIZE) + 1;
                let diff = rng.next_i32(100) as i64;
                (build(SIZE), l.min(r), l.max(r), diff)
            },
            |(mut tree, l, r, diff)| {
                tree.update(l, r, diff).unwrap();
                black_box(&tree);
            },
            BatchSize::SmallInput,
        )
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().output_directory(Path::new("target/criterion/indexed_sum_tree"))
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_insert,
              bench_erase,
              bench_range_sum,
              bench_range_update,
}
criterion_main!(benches);
