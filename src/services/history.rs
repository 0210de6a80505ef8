// ABOUTME: History service listing stored workouts newest first with display details
// ABOUTME: Invalid records are listed with a marker instead of aborting the view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{KeyValueStore, WorkoutRepository};
use tracing::debug;
use workout_intelligence::details::{build_history, HistoryEntry};

/// History view over a workout repository
pub struct HistoryService;

impl HistoryService {
    /// Rows for the currently stored history, newest first
    pub fn history<S: KeyValueStore>(repository: &WorkoutRepository<S>) -> Vec<HistoryEntry> {
        let entries = build_history(&repository.load_all());
        debug!(
            rows = entries.len(),
            invalid = entries.iter().filter(|entry| !entry.is_valid()).count(),
            "Built workout history"
        );
        entries
    }
}
