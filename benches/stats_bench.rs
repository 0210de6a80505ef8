// ABOUTME: Criterion benchmarks for the monthly workout statistics engine
// ABOUTME: Measures per-type aggregation, the full payload, and storage decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout statistics engine.
//!
//! Measures each per-type aggregator, the full stats payload, history
//! building, and snapshot decoding over histories of increasing size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_sized_history, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use workout_tracker::intelligence::{
    build_history, compute_hiit_stats, compute_strength_stats, compute_walking_stats,
    compute_yoga_stats, StatsConfig, StatsEngine,
};
use workout_tracker::storage::{decode_snapshot, MemoryStore, WorkoutRepository};

const SIZES: [HistorySize; 3] = [HistorySize::Small, HistorySize::Medium, HistorySize::Large];

/// Benchmark each per-type aggregator separately
fn bench_type_aggregators(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_aggregators");
    let config = StatsConfig::default();

    for size in SIZES {
        let records = generate_sized_history(size);
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("strength", records.len()),
            &records,
            |b, records| b.iter(|| compute_strength_stats(black_box(records), &config)),
        );
        group.bench_with_input(
            BenchmarkId::new("walking", records.len()),
            &records,
            |b, records| b.iter(|| compute_walking_stats(black_box(records), &config)),
        );
        group.bench_with_input(
            BenchmarkId::new("hiit", records.len()),
            &records,
            |b, records| b.iter(|| compute_hiit_stats(black_box(records), &config)),
        );
        group.bench_with_input(
            BenchmarkId::new("yoga", records.len()),
            &records,
            |b, records| b.iter(|| compute_yoga_stats(black_box(records), &config)),
        );
    }

    group.finish();
}

/// Benchmark the full stats payload
fn bench_full_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats_payload");
    let engine = StatsEngine::default();

    for size in SIZES {
        let records = generate_sized_history(size);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("compute", records.len()),
            &records,
            |b, records| b.iter(|| engine.compute(black_box(records))),
        );
    }

    group.finish();
}

/// Benchmark history rows with display details
fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    for size in SIZES {
        let records = generate_sized_history(size);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("build_history", records.len()),
            &records,
            |b, records| b.iter(|| build_history(black_box(records))),
        );
    }

    group.finish();
}

/// Benchmark decoding the stored blob into records
fn bench_snapshot_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in SIZES {
        let records = generate_sized_history(size);
        let mut repository = WorkoutRepository::new(MemoryStore::new());
        if repository.replace_all(&records).is_err() {
            continue;
        }
        let Ok(blob) = serde_json::to_value(&records) else {
            continue;
        };

        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode_value", records.len()),
            &blob,
            |b, blob| b.iter(|| decode_snapshot(black_box(blob.clone()))),
        );
        group.bench_with_input(
            BenchmarkId::new("load_all", records.len()),
            &repository,
            |b, repository| b.iter(|| black_box(repository).load_all()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_type_aggregators,
    bench_full_payload,
    bench_history,
    bench_snapshot_decoding
);
criterion_main!(benches);
