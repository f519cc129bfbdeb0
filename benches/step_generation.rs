//! Benchmarks for step recording and classification
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortvis_rs::algorithms::{self, Algorithm};
use sortvis_rs::analysis::classify;
use sortvis_rs::generator::{ArrayGenerator, ArrayPattern};

fn bench_sort_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_engines");
    let mut generator = ArrayGenerator::new(42);

    for size in [16usize, 64, 128].iter() {
        let input = generator.generate(ArrayPattern::Random, *size);
        group.throughput(Throughput::Elements(*size as u64));

        for algorithm in Algorithm::all() {
            group.bench_with_input(
                BenchmarkId::new(algorithm.id(), size),
                &input,
                |b, input| b.iter(|| algorithms::sort(*algorithm, black_box(input))),
            );
        }
    }

    group.finish();
}

fn bench_input_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_shapes");
    let mut generator = ArrayGenerator::new(7);

    for pattern in ArrayPattern::all() {
        let input = generator.generate(*pattern, 100);
        group.bench_with_input(
            BenchmarkId::new("insertion", pattern),
            &input,
            |b, input| b.iter(|| algorithms::sort(Algorithm::Insertion, black_box(input))),
        );
    }

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    let mut generator = ArrayGenerator::new(3);

    for size in [10usize, 100, 1000].iter() {
        let input = generator.generate(ArrayPattern::NearlySorted, *size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("classify", size), &input, |b, input| {
            b.iter(|| classify(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort_engines, bench_input_shapes, bench_classifier);

criterion_main!(benches);
