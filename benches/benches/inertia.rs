// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Vec2};
use pincher_geometry::Pinch;
use pincher_inertia::{
    Inertia, InertiaKind, InertiaRun, InertiaTuning, Motion, PinchSample, Pivot, Sample,
    TranslationSample, estimate_velocity,
};

fn translation_history(len: usize) -> Vec<TranslationSample> {
    (0..len)
        .map(|i| TranslationSample {
            delta: Vec2::new(1.0 + (i % 7) as f64, -0.5),
            dt: 16.0,
        })
        .collect()
}

fn pinch_history(len: usize) -> Vec<PinchSample> {
    (0..len)
        .map(|i| {
            let r = 50.0 + i as f64;
            let prev = [Point::new(-r, 0.0), Point::new(r, 0.0)];
            let next = [Point::new(-r - 1.0, 0.5), Point::new(r + 1.0, -0.5)];
            PinchSample {
                pinch: Pinch::between(&prev, &next).unwrap_or(Pinch::identity_at(Point::ORIGIN)),
                dt: 16.0,
            }
        })
        .collect()
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertia/estimate");
    let tuning = InertiaTuning::default();
    for len in [4usize, 32, 256, 1_024] {
        group.throughput(Throughput::Elements(len as u64));

        let samples: Vec<Sample<2>> = translation_history(len)
            .iter()
            .map(|s| Sample {
                deltas: [s.delta.x, s.delta.y],
                dt: s.dt,
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::new("estimate_velocity", len),
            &samples,
            |b, samples| b.iter(|| black_box(estimate_velocity(black_box(samples), &tuning))),
        );

        let pinches = pinch_history(len);
        group.bench_with_input(
            BenchmarkId::new("pinch_release_from", len),
            &pinches,
            |b, pinches| b.iter(|| black_box(Motion::pinch_release_from(pinches, &tuning))),
        );
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertia/run");
    let spin = Motion::Spin {
        angular: 0.002,
        log_scale: 0.0005,
        pivot: Pivot::Tracked,
    };
    let translate = Motion::Translate {
        velocity: Vec2::new(0.3, -0.1),
    };

    // One full braking run at 60 frames per second.
    group.throughput(Throughput::Elements(61));
    group.bench_function("translate_and_spin_frames", |b| {
        b.iter_batched(
            || {
                let mut inertia = Inertia::new();
                inertia.start(InertiaKind::Translate, InertiaRun::new(translate, 0.0, 1000.0));
                inertia.start(InertiaKind::Spin, InertiaRun::new(spin, 0.0, 1000.0));
                inertia
            },
            |mut inertia| {
                for frame in 0..=60 {
                    let now = f64::from(frame) * 1000.0 / 60.0;
                    black_box(inertia.tick(now, Point::new(10.0, 10.0)));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_run);
criterion_main!(benches);
