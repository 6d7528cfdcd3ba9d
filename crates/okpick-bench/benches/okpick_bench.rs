//! Benchmarks for okpick conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use okpick_color::cache::HueRampCache;
use okpick_color::plane::okhsv_plane;
use okpick_color::ramp::{HUE_SAMPLES, generate_oklch_hue_colors};
use okpick_color::{
    Okhsv, color_to_hsv, color_to_okhsv, color_to_oklab, color_to_oklch, okhsv_to_color,
    oklab_to_color,
};
use okpick_core::Color;
use okpick_transfer::srgb;

/// A spread of display colors covering the cube.
fn sample_colors(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            Color::rgb(t, (t * 7.0).fract(), (t * 13.0).fract())
        })
        .collect()
}

/// Benchmark the sRGB transfer function.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::oetf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark per-color conversions into and out of each space.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let colors = sample_colors(10000);
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("to_oklab", |b| {
        b.iter(|| colors.iter().map(|&x| color_to_oklab(black_box(x))).collect::<Vec<_>>())
    });

    group.bench_function("oklab_roundtrip", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&x| oklab_to_color(color_to_oklab(black_box(x))))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("to_oklch", |b| {
        b.iter(|| colors.iter().map(|&x| color_to_oklch(black_box(x))).collect::<Vec<_>>())
    });

    group.bench_function("to_hsv", |b| {
        b.iter(|| colors.iter().map(|&x| color_to_hsv(black_box(x))).collect::<Vec<_>>())
    });

    group.bench_function("to_okhsv", |b| {
        b.iter(|| colors.iter().map(|&x| color_to_okhsv(black_box(x))).collect::<Vec<_>>())
    });

    let okhsv: Vec<Okhsv> = colors.iter().map(|&x| color_to_okhsv(x)).collect();
    group.bench_function("from_okhsv", |b| {
        b.iter(|| okhsv.iter().map(|&x| okhsv_to_color(black_box(x))).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark the OkLCH hue ramp, uncached vs cache hit.
fn bench_hue_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("hue_ramp");

    group.bench_function("generate", |b| {
        b.iter(|| generate_oklch_hue_colors(black_box(0.5), black_box(0.3), HUE_SAMPLES))
    });

    let cache = HueRampCache::new();
    cache.get_or_generate(0.5, 0.3, HUE_SAMPLES);
    group.bench_function("cache_hit", |b| {
        b.iter(|| cache.get_or_generate(black_box(0.5), black_box(0.3), HUE_SAMPLES))
    });

    group.finish();
}

/// Benchmark picker plane generation.
fn bench_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane");

    for size in [64usize, 256].iter() {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("okhsv", size), size, |b, &s| {
            b.iter(|| okhsv_plane(black_box(210.0), s, s))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_convert, bench_hue_ramp, bench_plane);
criterion_main!(benches);
