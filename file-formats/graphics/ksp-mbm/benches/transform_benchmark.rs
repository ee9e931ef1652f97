//! Benchmarks for the pixel layout transforms

use criterion::{Criterion, criterion_group, criterion_main};
use ksp_mbm::convert::{classify_pixels, flip_rows, swap_red_blue};
use std::hint::black_box;

fn test_pixels(size: u32, bytes_per_pixel: usize) -> Vec<u8> {
    (0..size as usize * size as usize * bytes_per_pixel)
        .map(|n| (n * 31) as u8)
        .collect()
}

fn bench_flip_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_rows");

    for size in [256, 512, 1024].iter() {
        let pixels = test_pixels(*size, 4);
        group.bench_function(format!("rgba_{size}"), |b| {
            b.iter(|| flip_rows(black_box(&pixels), *size, *size, 4))
        });
    }

    group.finish();
}

fn bench_swap_red_blue(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_red_blue");

    for size in [256, 512, 1024].iter() {
        let pixels = test_pixels(*size, 3);
        group.bench_function(format!("rgb_{size}"), |b| {
            b.iter(|| swap_red_blue(black_box(&pixels), 3))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let pixels = test_pixels(512, 4);
    c.bench_function("classify_512", |b| {
        b.iter(|| classify_pixels(black_box(&pixels)))
    });
}

criterion_group!(benches, bench_flip_rows, bench_swap_red_blue, bench_classify);
criterion_main!(benches);
