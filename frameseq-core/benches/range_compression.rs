//! Benchmarks for range compression and batch grouping

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use frameseq_core::range::{compress, expand};
use frameseq_core::SequenceScanner;

/// Frames with a gap every `gap_every` entries
fn gappy_frames(count: u64, gap_every: u64) -> Vec<u64> {
    (0..count).map(|i| i + i / gap_every).collect()
}

fn benchmark_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for &count in &[1_000u64, 100_000] {
        let frames = gappy_frames(count, 50);
        group.throughput(Throughput::Elements(count));
        group.bench_function(format!("{count}_frames"), |b| {
            b.iter(|| compress(black_box(&frames)));
        });
    }

    group.finish();
}

fn benchmark_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    let frames = gappy_frames(100_000, 50);
    let ranges = compress(&frames);
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("100000_frames", |b| {
        b.iter(|| expand(black_box(&ranges)));
    });

    group.finish();
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let names: Vec<String> = (0..20_000)
        .map(|i| format!("shot{}.{:04}.exr", i % 8, i / 8))
        .collect();
    let scanner = SequenceScanner::new();

    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("20000_names", |b| {
        b.iter(|| scanner.scan(black_box(names.clone())));
    });

    group.finish();
}

criterion_group!(benches, benchmark_compress, benchmark_expand, benchmark_scan);
criterion_main!(benches);
