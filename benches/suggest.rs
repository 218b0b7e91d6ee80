//! Benchmarks for the suggestion engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tint::{suggest_in, Colour, Dialect, GENERATORS};

// -- Whole-request benchmarks --

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    // Early exit in the lighten sweep
    group.bench_function("exact_lighten", |b| {
        b.iter(|| suggest_in(black_box("#000000"), black_box("#333333"), Dialect::Less).unwrap())
    });

    // No sweep short-circuits; composite wins
    group.bench_function("composite", |b| {
        b.iter(|| suggest_in(black_box("#ff0000"), black_box("#206020"), Dialect::Sass).unwrap())
    });

    group.bench_function("unparseable", |b| {
        b.iter(|| suggest_in(black_box("nope"), black_box("#206020"), Dialect::Less).unwrap())
    });

    group.finish();
}

// -- Per-generator benchmarks --

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");

    let source = Colour::rgb(51.0, 102.0, 153.0);
    let target = Colour::rgb(102.0, 153.0, 204.0);

    for generator in GENERATORS {
        group.bench_function(generator.name(), |b| {
            b.iter(|| generator.generate(black_box(source), black_box(target), Dialect::Less))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_suggest, bench_generators);
criterion_main!(benches);
