//! Benchmarks for building curves by repeated cap-to-fork refinement.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hilbertfork::{BASE_CAP, Order, cap_to_fork, finegrain, hilbert_curve, points};

/// Orders exercised by the whole-curve benchmarks.
const ORDERS: [u32; 4] = [2, 4, 6, 8];

/// Benchmark a single cap-to-fork transform.
fn bench_cap_to_fork(c: &mut Criterion) {
    c.bench_function("cap_to_fork", |b| b.iter(|| cap_to_fork(black_box(&BASE_CAP))));
}

/// Benchmark one refinement step at increasing path lengths.
fn bench_finegrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("finegrain");

    for n in ORDERS {
        let order = Order::new(n).expect("valid order");
        let path = hilbert_curve(order);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| finegrain(black_box(&path)))
        });
    }

    group.finish();
}

/// Compare materialising a curve with streaming it.
fn bench_materialise_vs_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");

    for n in ORDERS {
        let order = Order::new(n).expect("valid order");
        group.bench_function(BenchmarkId::new("materialise", n), |b| {
            b.iter(|| hilbert_curve(black_box(order)))
        });
        group.bench_function(BenchmarkId::new("stream", n), |b| {
            b.iter(|| points(black_box(order)).fold(0.0, |acc, p| acc + p.x))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(
        benches,
        bench_cap_to_fork,
        bench_finegrain,
        bench_materialise_vs_stream
    );
}

pub use bench_defs::benches;
criterion_main!(benches);
