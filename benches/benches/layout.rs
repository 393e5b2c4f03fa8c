// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use honeycomb_layout::{BarEnd, BarLayout, BarMode, Color, HexGrid, cell_count, compute_centers};
use kurbo::{Rect, Size};

fn palette(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| Color::rgb((i * 37) as u8, (i * 91) as u8, (i * 13) as u8))
        .collect()
}

fn bench_centers(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_centers");
    for &radius in &[3_u32, 8, 32] {
        group.throughput(Throughput::Elements(cell_count(radius) as u64));
        group.bench_function(format!("radius_{radius}"), |b| {
            b.iter(|| {
                let centers = compute_centers(black_box(Size::new(640.0, 480.0)), radius);
                black_box(centers)
            });
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_grid");
    let colors = palette(7);
    for &radius in &[3_u32, 8, 32] {
        group.throughput(Throughput::Elements(cell_count(radius) as u64));
        group.bench_function(format!("new_radius_{radius}"), |b| {
            b.iter(|| {
                let grid = HexGrid::new(Rect::new(8.0, 8.0, 648.0, 488.0), radius, &colors);
                black_box(grid)
            });
        });
    }
    group.finish();
}

fn bench_bar(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_layout");
    for &n in &[8_usize, 64, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("new_shrunk_{n}"), |b| {
            b.iter(|| {
                let bar = BarLayout::new(0.0, 1000.0, black_box(n), BarMode::Auto, BarEnd::Unbounded);
                black_box(bar)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_centers, bench_grid, bench_bar);
criterion_main!(benches);
