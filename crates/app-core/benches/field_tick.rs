//! Benchmarks for the per-frame field update.
//!
//! Run with: `cargo bench -p backdrop-core`

use backdrop_core::{Choreography, FieldConfig, FrameInput, ParticleField};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tick");
    for name in ["home", "detail"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, name| {
            let mut field = ParticleField::new(FieldConfig::preset(name)).unwrap();
            let input = FrameInput {
                pointer_ndc: Some(Vec2::new(0.25, -0.4)),
                scroll_y: 600.0,
                ..FrameInput::default()
            };
            b.iter(|| {
                field.tick(black_box(1.0 / 60.0), &input);
                black_box(field.lines().len())
            })
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let field = ParticleField::new(FieldConfig::home()).unwrap();
    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(field.snapshot(Vec2::new(1920.0, 1080.0)).uniforms))
    });
}

fn bench_choreography(c: &mut Criterion) {
    let showcase = Choreography::showcase();
    c.bench_function("showcase_evaluate", |b| {
        b.iter(|| black_box(showcase.evaluate(black_box(0.63))))
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_choreography);
criterion_main!(benches);
