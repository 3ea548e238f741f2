//! # Trail Frame Benchmark
//!
//! A full trail (100 particles) must advance and render well inside a
//! 16.6ms frame; the target here is microseconds, not milliseconds.
//!
//! Run with: `cargo bench --package sparkle_trail`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sparkle_trail::{CommandRecorder, ParticleInstance, ParticleTrail, SeededRandom, TrailConfig};

fn full_trail(capacity: usize) -> ParticleTrail {
    let config = TrailConfig {
        capacity,
        spawn_probability: 1.0,
        ..TrailConfig::default()
    };
    let mut trail = match ParticleTrail::new(config, SeededRandom::new(42)) {
        Ok(trail) => trail,
        Err(err) => panic!("benchmark config rejected: {err}"),
    };
    trail.resize(1920.0, 1080.0);
    for i in 0..capacity {
        trail.on_pointer_move(i as f64, 540.0);
    }
    trail
}

/// Benchmark: pointer moves at the cap (spawn + evict).
fn bench_pointer_move(c: &mut Criterion) {
    let mut trail = full_trail(TrailConfig::DEFAULT_CAPACITY);
    let mut x = 0.0;
    c.bench_function("pointer_move_at_cap", |b| {
        b.iter(|| {
            x += 1.0;
            black_box(trail.on_pointer_move(x, 300.0))
        });
    });
}

/// Benchmark: advance + render, one display frame.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for capacity in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            let mut surface = CommandRecorder::new();
            b.iter_batched(
                || full_trail(capacity),
                |mut trail| {
                    trail.advance();
                    surface.begin_frame();
                    trail.render(&mut surface);
                    black_box(surface.command_count())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: instance packing for GPU upload.
fn bench_instances(c: &mut Criterion) {
    let trail = full_trail(10_000);
    let mut instances: Vec<ParticleInstance> = Vec::with_capacity(10_000);
    c.bench_function("write_instances_10k", |b| {
        b.iter(|| {
            trail.write_instances(&mut instances);
            black_box(instances.len())
        });
    });
}

criterion_group!(benches, bench_pointer_move, bench_frame, bench_instances);
criterion_main!(benches);
