//! Runnable benchmark harness for `indexed_sum_tree`.
//!
//! Mirrors the original dynamic-segment-tree benchmark: build a starting
//! sequence of `N` elements, then repeat `ITER` times a workload of `M`
//! random range-add updates, `M` random insertions and `M` random deletions,
//! timing an [`IndexedSumTree`] against a naive `Vec`-based reference.
//!
//! Run with `cargo run --example basic_usage --release`.
use std::time::Instant;

use indexed_sum_tree::IndexedSumTree;

#[path = "../benches/rng.rs"]
mod rng;
use rng::Lcg;

const N: usize = 100_000;
const M: usize = 10;
const ITER: usize = 10;

struct Workload {
    inserts: Vec<Vec<(usize, i32)>>,
    range_updates: Vec<Vec<(usize, usize, i32)>>,
    deletes: Vec<Vec<usize>>,
}

/// Generates one full `N`-step workload by simulating the sequence length
/// as it would evolve under the recorded operations, so every generated
/// position is valid for both the naive `Vec` and the tree — `inserts[N]`
/// is the starting sequence (built up front, growing the length from `0`
/// to `N`), and `inserts[0..N]`/`range_updates`/`deletes` are the per-step
/// workload applied afterward, each net-zero in length over a step.
fn generate_workload(seed: u64) -> Workload {
    let mut rng = Lcg::new(seed);
    let mut size = 0usize;

    let mut initial = Vec::with_capacity(N);
    for _ in 0..N {
        let pos = rng.next_usize(size + 1) + 1;
        let val = rng.next_i32(5) + 1;
        initial.push((pos, val));
        size += 1;
    }

    let mut inserts = Vec::with_capacity(N);
    let mut range_updates = Vec::with_capacity(N);
    let mut deletes = Vec::with_capacity(N);
    for _ in 0..N {
        let mut updates_step = Vec::with_capacity(M);
        for _ in 0..M {
            let p = rng.next_usize(size) + 1;
            let q = rng.next_usize(size) + 1;
            let diff = rng.next_i32(5) + 1;
            updates_step.push((p.min(q), p.max(q), diff));
        }
        range_updates.push(updates_step);

        let mut inserts_step = Vec::with_capacity(M);
        for _ in 0..M {
            let pos = rng.next_usize(size + 1) + 1;
            let val = rng.next_i32(5) + 1;
            inserts_step.push((pos, val));
            size += 1;
        }
        inserts.push(inserts_step);

        let mut deletes_step = Vec::with_capacity(M);
        for _ in 0..M {
            let pos = rng.next_usize(size) + 1;
            deletes_step.push(pos);
            size -= 1;
        }
        deletes.push(deletes_step);
    }

    // `inserts[N]` holds the up-front starting sequence (mirroring the
    // original benchmark's `insert_data.back()`); `inserts[0..N]` are the
    // per-step insertions applied in `bench_naive`/`bench_indexed_sum_tree`.
    inserts.push(initial);
    Workload {
        inserts,
        range_updates,
        deletes,
    }
}

fn bench_naive(workload: &Workload) {
    let mut vec: Vec<i32> = Vec::with_capacity(N + M * N);
    for &(pos, v) in &workload.inserts[N] {
        vec.insert(pos - 1, v);
    }
    for i in 0..N {
        for &(l, r, diff) in &workload.range_updates[i] {
            for x in vec.iter_mut().take(r).skip(l - 1) {
                *x += diff;
            }
        }
        for &(pos, v) in &workload.inserts[i] {
            vec.insert(pos - 1, v);
        }
        for &pos in &workload.deletes[i] {
            vec.remove(pos - 1);
        }
    }
}

fn bench_indexed_sum_tree(workload: &Workload) {
    let mut tree: IndexedSumTree<i32> = IndexedSumTree::new();
    for &(pos, v) in &workload.inserts[N] {
        tree.insert(pos, v).unwrap();
    }
    for i in 0..N {
        for &(l, r, diff) in &workload.range_updates[i] {
            tree.update(l, r, diff).unwrap();
        }
        for &(pos, v) in &workload.inserts[i] {
            tree.insert(pos, v).unwrap();
        }
        for &pos in &workload.deletes[i] {
            tree.erase(pos).unwrap();
        }
    }
}

fn main() {
    println!("*** IndexedSumTree Benchmark ***");

    print!("Generating workload ...");
    let workload = generate_workload(0xC0FFEE);
    println!(" done");

    print!("Running ...");
    let mut timings = Vec::with_capacity(ITER);
    for _ in 0..ITER {
        let start = Instant::now();
        bench_naive(&workload);
        let naive_ms = start.elapsed();

        let start = Instant::now();
        bench_indexed_sum_tree(&workload);
        let tree_ms = start.elapsed();

        timings.push((naive_ms, tree_ms));
    }
    println!(" done");

    println!("Results:");
    for (i, (naive, tree)) in timings.iter().enumerate() {
        println!(
            "  loop #{}, naive: {}ms, indexed sum tree: {}ms",
            i + 1,
            naive.as_millis(),
            tree.as_millis()
        );
    }
}
