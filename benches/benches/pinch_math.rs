// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use pincher::{Engine, PincherOptions};
use pincher_geometry::{Pinch, Transform};

/// `n` points on a circle of radius `r`, rotated by `phase`.
fn ring(n: usize, r: f64, phase: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = phase + i as f64 * core::f64::consts::TAU / n as f64;
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

fn bench_pinch_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/between");
    for n in [2usize, 3, 5, 10] {
        let prev = ring(n, 50.0, 0.0);
        let next = ring(n, 55.0, 0.05);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(prev, next),
            |b, (prev, next)| {
                b.iter(|| black_box(Pinch::between(black_box(prev), black_box(next))));
            },
        );
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let pinch = Pinch::between(&ring(2, 50.0, 0.0), &ring(2, 60.0, 0.1));
    let step = pinch.map_or(Transform::IDENTITY, |p| p.to_transform());

    group.bench_function("compose", |b| {
        let mut acc = Transform::IDENTITY;
        b.iter(|| {
            acc = black_box(step).compose(acc);
            if !acc.is_finite() {
                acc = Transform::IDENTITY;
            }
        });
    });
    group.bench_function("decompose", |b| {
        b.iter(|| black_box(black_box(step).decompose()));
    });
    group.bench_function("fixed_point", |b| {
        b.iter(|| black_box(black_box(step).fixed_point()));
    });
    group.finish();
}

fn bench_engine_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/move_pointer");
    for n in [1u32, 2, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut engine = Engine::<u32>::new(PincherOptions::default());
            let start = ring(n as usize, 50.0, 0.0);
            for (id, p) in (0..n).zip(&start) {
                engine.add_pointer(id, p.x, p.y, 0.0);
            }
            let mut t = 0.0;
            b.iter(|| {
                t += 16.0;
                let phase = (t * 0.001).sin();
                for (id, p) in (0..n).zip(ring(n as usize, 50.0 + phase, phase)) {
                    engine.move_pointer(id, p.x, p.y, t);
                }
                black_box(engine.transform());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pinch_between,
    bench_transform,
    bench_engine_moves
);
criterion_main!(benches);
