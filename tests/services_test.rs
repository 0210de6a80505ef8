// ABOUTME: Integration tests for the stats and history services over a repository
// ABOUTME: Verifies services read fresh snapshots and survive corrupt storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, memory_repository};
use workout_tracker::constants::storage_keys;
use workout_tracker::models::{HiitPayload, WalkingPayload, WorkoutData};
use workout_tracker::services::{HistoryService, StatsService};
use workout_tracker::storage::{MemoryStore, WorkoutRepository};

#[test]
fn test_stats_follow_repository_changes() {
    init_test_logging();
    let service = StatsService::default();
    let mut repository = memory_repository();
    assert!(service.stats(&repository).is_empty());

    repository
        .add_workout("2024-01-10", WorkoutData::Walking(WalkingPayload::new(3.0, 45.0)))
        .unwrap();
    let record = repository
        .add_workout("2024-02-10", WorkoutData::Walking(WalkingPayload::new(3.0, 42.0)))
        .unwrap();

    let stats = service.stats(&repository);
    assert_eq!(stats.distribution.walking, 2);
    assert!(stats.walking.as_ref().unwrap().progress.is_ready());

    repository.delete_workout(record.id).unwrap();
    let stats = service.stats(&repository);
    assert_eq!(stats.distribution.walking, 1);
    assert!(!stats.walking.as_ref().unwrap().progress.is_ready());
}

#[test]
fn test_stats_on_corrupt_storage_is_empty() {
    let repository = WorkoutRepository::new(MemoryStore::with_entry(storage_keys::WORKOUTS, "]["));
    let stats = StatsService::default().stats(&repository);
    assert_eq!(stats.placeholder(), Some("No workouts recorded yet."));
}

#[test]
fn test_history_lists_invalid_rows() {
    let mut repository = memory_repository();
    repository
        .add_workout("2024-01-10", WorkoutData::Walking(WalkingPayload::new(3.0, 45.0)))
        .unwrap();
    let mut payload = HiitPayload::new("Tabata", 8, 0.3, 0.2);
    payload.intervals = Some(0);
    repository
        .add_workout("2024-01-12", WorkoutData::Hiit(payload))
        .unwrap();

    let history = HistoryService::history(&repository);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].summary(), "Invalid hiit data");
    assert!(history[1].is_valid());
    assert_eq!(history[1].date, "2024-01-10");
}
