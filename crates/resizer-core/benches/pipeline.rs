//! Benchmarks for the resizer pipeline.
//!
//! Run with: cargo bench -p resizer-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageFormat};
use resizer_core::config::{FilterKind, ProcessingConfig, ResizeConfig};
use resizer_core::pipeline::{Encoder, ExtensionFilter, ImageDecoder, Resizer};
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut buf, ImageFormat::Jpeg)
        .expect("encode fixture");
    buf.into_inner()
}

fn benchmark_filter(c: &mut Criterion) {
    let filter = ExtensionFilter::from_config(&ProcessingConfig::default());
    let paths: Vec<PathBuf> = (0..1000)
        .map(|i| match i % 3 {
            0 => PathBuf::from(format!("photos/{i}/IMG_{i}.JPG")),
            1 => PathBuf::from(format!("photos/{i}/scan_{i}.png")),
            _ => PathBuf::from(format!("photos/{i}/raw_{i}.jpeg")),
        })
        .collect();

    c.bench_function("extension_filter_1000", |b| {
        b.iter(|| paths.iter().filter(|p| filter.accepts(black_box(p))).count())
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let bytes = jpeg_bytes(1920, 1080);

    c.bench_function("decode_jpeg_1080p", |b| {
        b.iter(|| {
            let _ = ImageDecoder::decode(Cursor::new(black_box(&bytes)), Path::new("bench.jpg"));
        })
    });
}

fn benchmark_resize(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(1920, 1080);
    let mut group = c.benchmark_group("resize_1080p_to_640w");

    for filter in [FilterKind::Triangle, FilterKind::Lanczos3] {
        let resizer = Resizer::new(&ResizeConfig {
            width: 640,
            filter,
            ..Default::default()
        });
        group.bench_function(format!("{filter:?}"), |b| {
            b.iter(|| resizer.resize(black_box(img.clone())))
        });
    }
    group.finish();
}

fn benchmark_encode(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(640, 360);
    let encoder = Encoder::new(&ResizeConfig::default());

    c.bench_function("encode_jpeg_640w", |b| {
        b.iter(|| {
            let mut buf = Cursor::new(Vec::new());
            let _ = encoder.encode(
                black_box(&img),
                ImageFormat::Jpeg,
                &mut buf,
                Path::new("bench_out.jpg"),
            );
        })
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_decode,
    benchmark_resize,
    benchmark_encode,
);
criterion_main!(benches);
