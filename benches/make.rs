use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use identicon_rust::{Identicon, Seed};

fn bench_make(c: &mut Criterion) {
    let mut group = c.benchmark_group("make");
    for size in [64u32, 128, 300] {
        let icon = Identicon::new(size, 5, 5).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &icon, |b, icon| {
            b.iter(|| icon.make(black_box(b"user@example.com")))
        });
    }
    group.finish();
}

fn bench_seed(c: &mut Criterion) {
    c.bench_function("seed_from_bytes", |b| {
        b.iter(|| Seed::from_bytes(black_box(b"4f2e9c1a7d3b8e6f0c5a2d9e1b4f7a3c6d8e0b2a")))
    });
}

criterion_group!(benches, bench_make, bench_seed);
criterion_main!(benches);
