use catmull_rom_splines::shared::spline_geometry::{centripetal_point, sample_span};
use catmull_rom_splines::{CurveBuilder, CurveSession, SplineOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_ring_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            Vec2::new(0.5 + 0.45 * angle.cos(), 0.5 + 0.45 * angle.sin())
        })
        .collect()
}

fn bench_point_evaluation(c: &mut Criterion) {
    let p = [
        Vec2::new(0.1, 0.1),
        Vec2::new(0.5, 0.1),
        Vec2::new(0.5, 0.5),
        Vec2::new(0.1, 0.5),
    ];

    c.bench_function("centripetal_point", |b| {
        b.iter(|| {
            black_box(centripetal_point(
                black_box(p[0]),
                black_box(p[1]),
                black_box(p[2]),
                black_box(p[3]),
                black_box(0.37),
                black_box(0.5),
            ))
        })
    });

    c.bench_function("sample_span_50", |b| {
        b.iter(|| {
            let samples = sample_span(black_box(p), 50, 0.5).expect("Sampling fehlgeschlagen");
            black_box(samples.len())
        })
    });
}

fn bench_loop_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_building");

    for &count in &[8usize, 64usize] {
        // Abstand benachbarter Ringpunkte muss über der Schließtoleranz liegen
        let points = build_ring_points(count);
        let tolerance = points[0].distance(points[1]) * 0.5;

        group.bench_with_input(BenchmarkId::new("close_ring", count), &points, |b, pts| {
            b.iter(|| {
                let mut builder = CurveBuilder::with_tolerance(tolerance);
                for p in pts {
                    builder.add_point(black_box(*p));
                }
                black_box(builder.add_point(pts[0]))
            })
        });

        let mut session = CurveSession::with_options(SplineOptions {
            closure_tolerance: tolerance,
            ..SplineOptions::default()
        });
        for p in &points {
            session.add_control_point(p.x, p.y);
        }
        session.add_control_point(points[0].x, points[0].y);

        group.bench_with_input(
            BenchmarkId::new("sample_closed", count),
            &session,
            |b, s| {
                b.iter(|| {
                    let curve = &s.finished_curves()[0];
                    let sampled = s
                        .sample_closed_curve(curve, 50)
                        .expect("Sampling fehlgeschlagen");
                    black_box(sampled.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_point_evaluation, bench_loop_building);
criterion_main!(core_benches);
