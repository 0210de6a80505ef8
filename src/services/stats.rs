// ABOUTME: Stats service computing the stats payload from the stored history
// ABOUTME: Times each computation and logs a structured summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use crate::storage::{KeyValueStore, WorkoutRepository};
use std::time::Instant;
use workout_intelligence::config::StatsConfig;
use workout_intelligence::engine::{StatsEngine, StatsPayload};

/// Stats view over a workout repository
#[derive(Debug, Clone, Default)]
pub struct StatsService {
    engine: StatsEngine,
}

impl StatsService {
    /// Create a service with an explicit engine configuration
    #[must_use]
    pub const fn new(config: StatsConfig) -> Self {
        Self {
            engine: StatsEngine::new(config),
        }
    }

    /// Create a service using the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(StatsConfig::global().clone())
    }

    /// Engine in use
    #[must_use]
    pub const fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    /// Compute stats for the currently stored history
    pub fn stats<S: KeyValueStore>(&self, repository: &WorkoutRepository<S>) -> StatsPayload {
        let started = Instant::now();
        let records = repository.load_all();
        let payload = self.engine.compute(&records);

        AppLogger::log_stats_computed(
            records.len(),
            payload.data_quality.len(),
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        );
        payload
    }
}
