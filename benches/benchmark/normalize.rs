use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use std::hint::black_box;
use validation_rail::sequence::normalize;
use validation_rail::{ErrorSource, Lazy, SinglePass};

pub fn bench_normalize_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("single_entry", |b| {
        b.iter(|| {
            let entries: usize = normalize(black_box("required")).count();
            black_box(entries);
        })
    });

    for size in [1usize, 8, 64] {
        let entries: Vec<String> = (0..size).map(|i| format!("entry {i}")).collect();

        group.bench_with_input(BenchmarkId::new("ordered", size), &entries, |b, entries| {
            let source = ErrorSource::ordered(entries.clone());
            b.iter(|| black_box(source.sequence().count()))
        });

        group.bench_with_input(BenchmarkId::new("lazy", size), &entries, |b, entries| {
            let source: ErrorSource<String> = Lazy::new(entries.clone().into_iter()).into();
            b.iter(|| black_box(source.sequence().count()))
        });

        group.bench_with_input(BenchmarkId::new("single_pass", size), &entries, |b, entries| {
            b.iter(|| {
                let source: ErrorSource<String> = SinglePass::new(entries.clone().into_iter()).into();
                black_box(source.sequence().count())
            })
        });
    }

    group.finish();
}

pub fn bench_is_empty_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_empty");

    group.bench_function("infinite_lazy", |b| {
        let source = ErrorSource::lazy((0u64..).map(|n| n * 2));
        b.iter(|| black_box(source.is_empty()))
    });

    group.bench_function("single_pass_repeated", |b| {
        b.iter(|| {
            let source = ErrorSource::single_pass(0u64..1000);
            for _ in 0..8 {
                black_box(source.is_empty());
            }
        })
    });

    group.finish();
}

criterion_group! {
    name = normalize_benches;
    config = configure_criterion();
    targets = bench_normalize_shapes, bench_is_empty_probe
}
