// ABOUTME: Walking aggregation by calendar month with distance, pace, and session comparisons
// ABOUTME: Pace is derived from duration over distance and compared with inverted sign
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::MonthKey;
use crate::comparison::{mean, MetricComparison, ProgressReport};
use crate::config::StatsConfig;
use crate::quality::{partition_dated, DataQualityIssue};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use workout_core::constants::precision;
use workout_core::models::{WorkoutRecord, WorkoutType};

/// Walking totals for one month
#[derive(Debug, Clone, Default)]
struct WalkingMonth {
    month_name: &'static str,
    year: i32,
    total_distance: f64,
    total_duration: f64,
    workout_count: u32,
    paces: Vec<f64>,
}

impl WalkingMonth {
    fn average_distance(&self) -> f64 {
        mean(self.total_distance, self.workout_count)
    }

    fn average_pace(&self) -> f64 {
        let count = u32::try_from(self.paces.len()).unwrap_or(u32::MAX);
        mean(self.paces.iter().sum(), count)
    }
}

/// Walking summary of one month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkingMonthSummary {
    /// Month key
    pub month: MonthKey,
    /// English month name
    pub month_name: &'static str,
    /// Calendar year
    pub year: i32,
    /// Miles walked
    pub total_distance: f64,
    /// Minutes walked
    pub total_duration: f64,
    /// Walks logged
    pub workout_count: u32,
    /// Miles per walk
    pub average_distance: f64,
    /// Mean min/mi over walks with both distance and duration; 0 when none
    pub average_pace: f64,
    /// Walks that produced a pace sample
    pub pace_samples: usize,
}

/// Latest walking month compared with the month before it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkingComparison {
    /// Latest month
    pub current_month: MonthKey,
    /// Month before it
    pub previous_month: MonthKey,
    /// Total miles
    pub total_distance: MetricComparison,
    /// Miles per walk
    pub average_distance: MetricComparison,
    /// Mean pace; positive delta means faster
    pub average_pace: MetricComparison,
    /// Walks logged
    pub workout_count: MetricComparison,
}

/// Walking statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkingStats {
    /// Month summaries in chronological order
    pub months: Vec<WalkingMonthSummary>,
    /// Month-over-month comparison
    pub progress: ProgressReport<WalkingComparison>,
    /// Walking records excluded from the months
    pub data_quality: Vec<DataQualityIssue>,
}

/// Aggregate walking records by month and compare the latest two months
#[must_use]
pub fn compute_walking_stats(records: &[WorkoutRecord], config: &StatsConfig) -> WalkingStats {
    let dated = partition_dated(records, WorkoutType::Walking);
    let mut months: BTreeMap<MonthKey, WalkingMonth> = BTreeMap::new();

    for (keys, record) in dated.entries {
        let Some(walk) = record.as_walking() else {
            continue;
        };
        let bucket = months.entry(keys.month).or_insert_with(|| WalkingMonth {
            month_name: keys.month_name,
            year: keys.year,
            ..WalkingMonth::default()
        });

        let distance = walk.distance.unwrap_or(0.0);
        let duration = walk.duration.unwrap_or(0.0);
        bucket.total_distance += distance;
        bucket.total_duration += duration;
        bucket.workout_count += 1;

        if distance > 0.0 && duration > 0.0 {
            bucket.paces.push(duration / distance);
        }
    }

    let progress = compare_latest(&months, config);
    debug!(
        months = months.len(),
        ready = progress.is_ready(),
        "Computed walking stats"
    );

    WalkingStats {
        months: months.iter().map(|(&key, month)| summarize(key, month)).collect(),
        progress,
        data_quality: dated.issues,
    }
}

fn summarize(key: MonthKey, month: &WalkingMonth) -> WalkingMonthSummary {
    WalkingMonthSummary {
        month: key,
        month_name: month.month_name,
        year: month.year,
        total_distance: month.total_distance,
        total_duration: month.total_duration,
        workout_count: month.workout_count,
        average_distance: month.average_distance(),
        average_pace: month.average_pace(),
        pace_samples: month.paces.len(),
    }
}

fn compare_latest(
    months: &BTreeMap<MonthKey, WalkingMonth>,
    config: &StatsConfig,
) -> ProgressReport<WalkingComparison> {
    let months_available = months.len();
    let mut latest = months.iter().rev();
    let (Some((&current_key, current)), Some((&previous_key, previous))) =
        (latest.next(), latest.next())
    else {
        return ProgressReport::NeedMoreData { months_available };
    };
    if months_available < config.min_comparison_months {
        return ProgressReport::NeedMoreData { months_available };
    }

    ProgressReport::Ready(WalkingComparison {
        current_month: current_key,
        previous_month: previous_key,
        total_distance: MetricComparison::higher_is_better(
            current.total_distance,
            previous.total_distance,
            precision::DISTANCE,
        ),
        average_distance: MetricComparison::higher_is_better(
            current.average_distance(),
            previous.average_distance(),
            precision::DISTANCE,
        ),
        average_pace: MetricComparison::lower_is_better(
            current.average_pace(),
            previous.average_pace(),
            precision::PACE,
        ),
        workout_count: MetricComparison::higher_is_better(
            f64::from(current.workout_count),
            f64::from(previous.workout_count),
            precision::COUNT,
        ),
    })
}
