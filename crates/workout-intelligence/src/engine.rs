// ABOUTME: Stats orchestrator combining the distribution and every per-type aggregator
// ABOUTME: Skips types without records and collects excluded records into one quality report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::StatsConfig;
use crate::distribution::{summarize_distribution, WorkoutDistribution};
use crate::hiit::{compute_hiit_stats, HiitStats};
use crate::quality::DataQualityIssue;
use crate::strength::{compute_strength_stats, StrengthStats};
use crate::walking::{compute_walking_stats, WalkingStats};
use crate::yoga::{compute_yoga_stats, YogaStats};
use serde::Serialize;
use tracing::{debug, instrument};
use workout_core::constants::messages;
use workout_core::models::{WorkoutRecord, WorkoutType};

/// Everything the stats view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    /// Sessions per type across the whole history
    pub distribution: WorkoutDistribution,
    /// Strength statistics, when strength records exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthStats>,
    /// Walking statistics, when walking records exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking: Option<WalkingStats>,
    /// HIIT statistics, when HIIT records exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiit: Option<HiitStats>,
    /// Yoga statistics, when yoga records exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yoga: Option<YogaStats>,
    /// Records excluded from every aggregator
    pub data_quality: Vec<DataQualityIssue>,
}

impl StatsPayload {
    /// Whether the history holds no records at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.distribution.total() == 0
    }

    /// Message shown instead of the stats view for an empty history
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(messages::NO_WORKOUTS)
        } else {
            None
        }
    }
}

/// Stats orchestrator
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    config: StatsConfig,
}

impl StatsEngine {
    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Compute the full stats payload for a snapshot
    ///
    /// Aggregators run in display order (strength, walking, HIIT, yoga) and
    /// only for types that have at least one record.
    #[must_use]
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn compute(&self, records: &[WorkoutRecord]) -> StatsPayload {
        let distribution = summarize_distribution(records);
        let has = |workout_type| distribution.count(workout_type) > 0;

        let strength =
            has(WorkoutType::Strength).then(|| compute_strength_stats(records, &self.config));
        let walking =
            has(WorkoutType::Walking).then(|| compute_walking_stats(records, &self.config));
        let hiit = has(WorkoutType::Hiit).then(|| compute_hiit_stats(records, &self.config));
        let yoga = has(WorkoutType::Yoga).then(|| compute_yoga_stats(records, &self.config));

        let data_quality: Vec<DataQualityIssue> = strength
            .iter()
            .flat_map(|stats| stats.data_quality.iter())
            .chain(walking.iter().flat_map(|stats| stats.data_quality.iter()))
            .chain(hiit.iter().flat_map(|stats| stats.data_quality.iter()))
            .chain(yoga.iter().flat_map(|stats| stats.data_quality.iter()))
            .cloned()
            .collect();

        debug!(
            total = distribution.total(),
            excluded = data_quality.len(),
            "Computed workout stats"
        );

        StatsPayload {
            distribution,
            strength,
            walking,
            hiit,
            yoga,
            data_quality,
        }
    }
}

/// Compute stats with the default configuration
#[must_use]
pub fn compute_stats(records: &[WorkoutRecord]) -> StatsPayload {
    StatsEngine::default().compute(records)
}
