// ABOUTME: Shared test utilities and record fixtures for integration tests
// ABOUTME: Provides logging setup and builders for each workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `workout_tracker`
//!
//! Fixture builders keep the integration tests focused on the numbers being
//! checked instead of on payload construction.

use std::env;
use std::sync::Once;
use workout_tracker::models::{
    Exercise, HiitPayload, PlanId, StrengthPayload, WalkingPayload, WorkoutData, WorkoutRecord,
    YogaPayload,
};
use workout_tracker::storage::{MemoryStore, WorkoutRepository};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once at test start)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Walking record with distance (miles) and duration (minutes)
pub fn walk(id: i64, date: &str, distance: f64, duration: f64) -> WorkoutRecord {
    WorkoutRecord::new(
        id,
        date,
        WorkoutData::Walking(WalkingPayload::new(distance, duration)),
    )
}

/// HIIT record with a type and interval layout
pub fn hiit(id: i64, date: &str, hiit_type: &str, intervals: u32) -> WorkoutRecord {
    WorkoutRecord::new(
        id,
        date,
        WorkoutData::Hiit(HiitPayload::new(hiit_type, intervals, 1.0, 0.5)),
    )
}

/// HIIT record built from an explicit payload
pub fn hiit_with(id: i64, date: &str, payload: HiitPayload) -> WorkoutRecord {
    WorkoutRecord::new(id, date, WorkoutData::Hiit(payload))
}

/// Yoga record with a style and duration (minutes)
pub fn yoga(id: i64, date: &str, style: &str, duration: f64) -> WorkoutRecord {
    WorkoutRecord::new(id, date, WorkoutData::Yoga(YogaPayload::new(style, duration)))
}

/// Strength record for plan A with `(exercise, [(weight, reps)])` entries
pub fn strength(id: i64, date: &str, exercises: &[(&str, &[(f64, u32)])]) -> WorkoutRecord {
    let payload = exercises
        .iter()
        .fold(StrengthPayload::new(PlanId::A), |payload, (name, sets)| {
            let exercise = sets
                .iter()
                .fold(Exercise::new(*name), |exercise, &(weight, reps)| {
                    exercise.with_set(weight, reps)
                });
            payload.with_exercise(exercise)
        });
    WorkoutRecord::new(id, date, WorkoutData::Strength(payload))
}

/// Repository over an empty in-memory store
pub fn memory_repository() -> WorkoutRepository<MemoryStore> {
    WorkoutRepository::new(MemoryStore::new())
}

/// Assert two floats are equal within a small tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
