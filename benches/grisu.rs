use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_small(c: &mut Criterion) {
    c.bench_function("small", |b| {
        b.iter(|| grisu::to_exp_string(black_box(3.141592f64)))
    });
}

fn bench_big(c: &mut Criterion) {
    c.bench_function("big", |b| b.iter(|| grisu::to_exp_string(black_box(f64::MAX))));
}

criterion_group!(benches, bench_small, bench_big);
criterion_main!(benches);
