use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_editor::core::{pick_line, CurvePoints};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_curve(point_count: usize) -> CurvePoints {
    let points = (0..point_count)
        .map(|i| {
            let t = i as f32 / (point_count - 1) as f32;
            Vec2::new((t * 7.0).sin() * 0.5 + 0.5, t)
        })
        .collect();
    CurvePoints::from_points(points).expect("synthetische Kurve gültig")
}

fn build_query_values(count: usize) -> Vec<f32> {
    (0..count).map(|i| ((i * 37) % 1000) as f32 / 1000.0).collect()
}

fn bench_insertion_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_scan");

    for &point_count in &[16usize, 1_000usize, 100_000usize] {
        let curve = build_synthetic_curve(point_count);
        let queries = build_query_values(256);

        group.bench_with_input(
            BenchmarkId::new("insertion_index_batch", point_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for &y in &queries {
                        if curve.insertion_index(black_box(y)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_boundary_clamp(c: &mut Criterion) {
    let curve = build_synthetic_curve(1_000);
    let raw: Vec<Vec2> = (0..1024)
        .map(|i| Vec2::new((i % 31) as f32 / 10.0 - 1.0, (i % 17) as f32 / 5.0 - 1.5))
        .collect();

    c.bench_function("boundary_clamp_all_points", |b| {
        b.iter(|| {
            let mut sum = Vec2::ZERO;
            for (index, pos) in raw.iter().enumerate() {
                let boundary = curve.boundary_for(index % curve.len());
                sum += boundary.clamp(black_box(*pos));
            }
            black_box(sum)
        })
    });
}

fn bench_line_pick(c: &mut Criterion) {
    let curve = build_synthetic_curve(1_000);
    let queries: Vec<Vec2> = build_query_values(256)
        .into_iter()
        .map(|v| Vec2::new(1.0 - v, v))
        .collect();

    c.bench_function("pick_line_batch", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &pos in &queries {
                if pick_line(curve.as_slice(), black_box(pos), 0.01).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(
    benches,
    bench_insertion_scan,
    bench_boundary_clamp,
    bench_line_pick
);
criterion_main!(benches);
