// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use honeycomb_layout::{BarEnd, BarLayout, BarMode, Color, CycleColors, HexGrid};
use honeycomb_picker::{HexPicker, HitStrategy};
use kurbo::{Point, Rect, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const QUERIES: usize = 1024;

fn gen_points(count: usize, w: f64, h: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.random_range(0.0..w), rng.random_range(0.0..h)))
        .collect()
}

fn bench_grid_analytic(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_hit_test");
    let points = gen_points(QUERIES, 600.0, 600.0);
    for &radius in &[3_u32, 8, 32] {
        let grid = HexGrid::new(Rect::new(0.0, 0.0, 600.0, 600.0), radius, &[Color::BLACK])
            .expect("valid radius and palette");
        group.throughput(Throughput::Elements(QUERIES as u64));
        group.bench_function(format!("analytic_radius_{radius}"), |b| {
            b.iter(|| {
                let hits = points.iter().filter_map(|&p| grid.hit_test(p)).count();
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn picker(radius: u32, strategy: HitStrategy) -> HexPicker {
    let mut p = HexPicker::with_color_source(CycleColors::new(vec![Color::BLACK]));
    p.set_radius(radius).expect("valid radius");
    p.set_hit_strategy(strategy);
    p.set_size(Size::new(600.0, 600.0));
    p
}

fn bench_picker_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker_hit_test");
    let points = gen_points(QUERIES, 600.0, 600.0);
    for strategy in [HitStrategy::Analytic, HitStrategy::Raster] {
        let mut p = picker(8, strategy);
        // Warm the cache so only lookups are measured.
        let _ = p.hit_test(Point::new(300.0, 300.0));
        group.throughput(Throughput::Elements(QUERIES as u64));
        group.bench_function(format!("{strategy:?}_radius_8"), |b| {
            b.iter(|| {
                let hits = points.iter().filter_map(|&pt| p.hit_test(pt)).count();
                black_box(hits)
            });
        });
    }
    group.bench_function("raster_rebuild_radius_8", |b| {
        b.iter_batched(
            || picker(8, HitStrategy::Raster),
            |mut p| black_box(p.hit_test(Point::new(300.0, 300.0))),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_bar(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar_hit_test");
    let points = gen_points(QUERIES, 1000.0, 1.0);
    for &n in &[8_usize, 64, 1024] {
        let bar = BarLayout::new(0.0, 1000.0, n, BarMode::Auto, BarEnd::Clamped)
            .expect("non-empty palette");
        group.throughput(Throughput::Elements(QUERIES as u64));
        group.bench_function(format!("colors_{n}"), |b| {
            b.iter(|| {
                let hits = points.iter().filter_map(|p| bar.hit_test(p.x)).count();
                black_box(hits)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_analytic, bench_picker_strategies, bench_bar);
criterion_main!(benches);
