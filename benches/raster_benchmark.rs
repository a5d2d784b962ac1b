#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for outline rasterization (segments, circles, ellipses, squares).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use pixel_raster::prelude::*;
use pixel_raster::render::{circle, ellipse, segment, square, SegmentPixels};

fn segment_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    let mut fb = Framebuffer::filled(1920, 1080, Rgba::BLACK).expect("framebuffer creation should succeed");

    for length in [10, 100, 1_000] {
        let finish = Point::new(length, length / 3);
        group.bench_with_input(BenchmarkId::from_parameter(length), &finish, |b, &finish| {
            b.iter(|| {
                segment(&mut fb, black_box(Point::ORIGIN), black_box(finish), Rgba::WHITE)
                    .expect("segment should draw")
            });
        });
    }

    group.finish();
}

fn segment_iterator_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_pixels");

    for length in [100, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| SegmentPixels::new(Point::ORIGIN, black_box(Point::new(length, -length / 7))).count());
        });
    }

    group.finish();
}

fn curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");
    let mut fb = Framebuffer::filled(1024, 1024, Rgba::BLACK).expect("framebuffer creation should succeed");
    let center = Point::new(512, 512);

    for radius in [16, 128, 500] {
        group.bench_with_input(BenchmarkId::new("circle", radius), &radius, |b, &radius| {
            b.iter(|| circle(&mut fb, center, black_box(radius), Rgba::BLUE).expect("circle should draw"));
        });
        group.bench_with_input(BenchmarkId::new("ellipse", radius), &radius, |b, &radius| {
            b.iter(|| {
                ellipse(&mut fb, center, black_box(radius), black_box(radius / 2), Rgba::GREEN)
                    .expect("ellipse should draw")
            });
        });
    }

    group.finish();
}

fn rotated_square_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotated_square");
    let mut fb = Framebuffer::filled(800, 600, Rgba::BLACK).expect("framebuffer creation should succeed");

    for angle in [0.0, 30.0, 45.0] {
        group.bench_with_input(BenchmarkId::from_parameter(angle), &angle, |b, &angle| {
            b.iter(|| square(&mut fb, 200, 150, 200, black_box(angle), Rgba::RED).expect("square should draw"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    segment_benchmark,
    segment_iterator_benchmark,
    curve_benchmark,
    rotated_square_benchmark
);
criterion_main!(benches);
