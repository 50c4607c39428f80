#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for segment and edge-list rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edge_raster::prelude::*;

fn draw_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let mut screen = Screen::default();

    // One segment per octant, all 400 pixels long on the major axis.
    let segments = [
        ("octant_1", (50.0, 50.0, 450.0, 250.0)),
        ("octant_2", (50.0, 50.0, 250.0, 450.0)),
        ("octant_7", (50.0, 450.0, 250.0, 50.0)),
        ("octant_8", (50.0, 450.0, 450.0, 250.0)),
        ("vertical", (250.0, 50.0, 250.0, 450.0)),
    ];

    for (name, (x0, y0, x1, y1)) in segments {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, _| {
            b.iter(|| {
                draw_line(
                    &mut screen,
                    black_box(x0),
                    black_box(y0),
                    black_box(x1),
                    black_box(y1),
                    DEFAULT_DRAW_COLOR,
                );
            });
        });
    }

    group.finish();
}

fn draw_lines_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_lines");

    for edge_count in [10, 100, 1_000] {
        let mut edges = EdgeMatrix::with_capacity(edge_count * 2);
        for i in 0..edge_count {
            let f = i as f64;
            edges.add_edge(
                Point3::new(f % 500.0, 0.0, 0.0),
                Point3::new(499.0 - f % 500.0, 499.0, 0.0),
            );
        }
        let mut screen = Screen::default();

        group.bench_with_input(BenchmarkId::from_parameter(edge_count), &edge_count, |b, _| {
            b.iter(|| draw_lines(black_box(&edges), &mut screen, DEFAULT_DRAW_COLOR));
        });
    }

    group.finish();
}

criterion_group!(benches, draw_line_benchmark, draw_lines_benchmark);
criterion_main!(benches);
