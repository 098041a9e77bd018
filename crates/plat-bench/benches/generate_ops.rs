//! Criterion benchmarks for full area generation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use plat_area::{GroupingStrategy, SeededSource};
use plat_bench::{reference_profile, stress_profile, town_profile, Profile};
use plat_render::{render_html, TextRenderer};

fn bench_profile(c: &mut Criterion, name: &str, profile: &Profile) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || profile.build().unwrap(),
            |mut area| {
                let stats = area.generate(&mut SeededSource::new(42)).unwrap();
                black_box(stats);
                area
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: generate the 10x20 demo area.
fn bench_generate_town(c: &mut Criterion) {
    bench_profile(c, "generate_town_200", &town_profile());
}

/// Benchmark: generate a 100x100 area with relaxation grouping.
fn bench_generate_reference(c: &mut Criterion) {
    bench_profile(c, "generate_reference_10k", &reference_profile());
}

/// Benchmark: generate a 100x100 area with union-find grouping.
fn bench_generate_reference_union_find(c: &mut Criterion) {
    let profile = reference_profile().with_grouping(GroupingStrategy::UnionFind);
    bench_profile(c, "generate_reference_10k_union_find", &profile);
}

/// Benchmark: generate a 316x316 area.
fn bench_generate_stress(c: &mut Criterion) {
    bench_profile(c, "generate_stress_100k", &stress_profile());
}

/// Benchmark: render a generated 100x100 area as text and as HTML.
fn bench_render_reference(c: &mut Criterion) {
    let mut area = reference_profile().build().unwrap();
    area.generate(&mut SeededSource::new(42)).unwrap();
    let renderer = TextRenderer::new();

    c.bench_function("render_text_10k", |b| {
        b.iter(|| black_box(renderer.render(&area)));
    });
    c.bench_function("render_html_10k", |b| {
        b.iter(|| black_box(render_html(&area)));
    });
}

criterion_group!(
    benches,
    bench_generate_town,
    bench_generate_reference,
    bench_generate_reference_union_find,
    bench_generate_stress,
    bench_render_reference,
);
criterion_main!(benches);
