// ABOUTME: HIIT aggregation by calendar month with interval, heart-rate, and run metrics
// ABOUTME: Running sessions feed a separate distance and pace sub-aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::MonthKey;
use crate::comparison::{
    mean, percentage_breakdown, BreakdownEntry, MetricComparison, ProgressReport,
};
use crate::config::StatsConfig;
use crate::quality::{partition_dated, DataQualityIssue};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use workout_core::constants::precision;
use workout_core::models::{HiitPayload, WorkoutRecord, WorkoutType};

/// Run totals inside one HIIT month
#[derive(Debug, Clone, Default)]
struct RunMonth {
    total_distance: f64,
    workout_count: u32,
    pace_total: f64,
    pace_samples: u32,
}

impl RunMonth {
    fn add(&mut self, distance: f64, avg_pace: Option<f64>) {
        self.total_distance += distance;
        self.workout_count += 1;
        if let Some(pace) = avg_pace.filter(|pace| *pace > 0.0) {
            self.pace_total += pace;
            self.pace_samples += 1;
        }
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            total_distance: self.total_distance,
            workout_count: self.workout_count,
            average_distance: mean(self.total_distance, self.workout_count),
            // runs without a pace stay out of the mean instead of counting as zero
            average_pace: mean(self.pace_total, self.pace_samples),
            pace_samples: self.pace_samples,
        }
    }
}

/// HIIT totals for one month
#[derive(Debug, Clone, Default)]
struct HiitMonth {
    month_name: &'static str,
    year: i32,
    workout_count: u32,
    total_duration: f64,
    total_intervals: f64,
    total_work_time: f64,
    total_rest_time: f64,
    heart_rate_total: f64,
    heart_rate_samples: u32,
    types: IndexMap<String, u32>,
    run: Option<RunMonth>,
}

impl HiitMonth {
    fn add(&mut self, session: &HiitPayload, config: &StatsConfig) {
        let hiit_type = session
            .hiit_type
            .as_deref()
            .unwrap_or(&config.unknown_label);
        *self.types.entry(hiit_type.to_owned()).or_insert(0) += 1;

        self.workout_count += 1;
        self.total_duration += session.total_duration.unwrap_or(0.0);
        self.total_intervals += f64::from(session.intervals.unwrap_or(0));
        self.total_work_time += session.work_time.unwrap_or(0.0);
        self.total_rest_time += session.rest_time.unwrap_or(0.0);

        if let Some(heart_rate) = session.heart_rate.filter(|hr| *hr > 0.0) {
            self.heart_rate_total += heart_rate;
            self.heart_rate_samples += 1;
        }

        let is_run = session
            .hiit_type
            .as_deref()
            .is_some_and(|hiit_type| config.is_running_type(hiit_type));
        if let Some(distance) = session.distance.filter(|distance| is_run && *distance > 0.0) {
            self.run
                .get_or_insert_with(RunMonth::default)
                .add(distance, session.avg_pace);
        }
    }

    fn average_heart_rate(&self) -> f64 {
        mean(self.heart_rate_total, self.heart_rate_samples)
    }

    fn summary(&self, key: MonthKey) -> HiitMonthSummary {
        HiitMonthSummary {
            month: key,
            month_name: self.month_name,
            year: self.year,
            workout_count: self.workout_count,
            total_duration: self.total_duration,
            average_intervals: mean(self.total_intervals, self.workout_count),
            average_work_time: mean(self.total_work_time, self.workout_count),
            average_rest_time: mean(self.total_rest_time, self.workout_count),
            average_heart_rate: self.average_heart_rate(),
            heart_rate_samples: self.heart_rate_samples,
            type_breakdown: percentage_breakdown(&self.types, self.workout_count),
            run: self.run.as_ref().map(RunMonth::summary),
        }
    }
}

/// Run metrics of one HIIT month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Miles run
    pub total_distance: f64,
    /// Running sessions with a distance
    pub workout_count: u32,
    /// Miles per running session
    pub average_distance: f64,
    /// Mean of recorded average paces (min/mi); 0 when none
    pub average_pace: f64,
    /// Running sessions with a recorded pace
    pub pace_samples: u32,
}

/// HIIT summary of one month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitMonthSummary {
    /// Month key
    pub month: MonthKey,
    /// English month name
    pub month_name: &'static str,
    /// Calendar year
    pub year: i32,
    /// Sessions logged
    pub workout_count: u32,
    /// Minutes across sessions
    pub total_duration: f64,
    /// Intervals per session
    pub average_intervals: f64,
    /// Work interval minutes per session
    pub average_work_time: f64,
    /// Rest interval minutes per session
    pub average_rest_time: f64,
    /// Mean BPM over sessions with a heart rate; 0 when none
    pub average_heart_rate: f64,
    /// Sessions with a heart rate
    pub heart_rate_samples: u32,
    /// Sessions per HIIT type, first-seen order
    pub type_breakdown: Vec<BreakdownEntry>,
    /// Run metrics, when a running session carried a distance
    pub run: Option<RunSummary>,
}

/// Latest HIIT month compared with the month before it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitComparison {
    /// Latest month
    pub current_month: MonthKey,
    /// Month before it
    pub previous_month: MonthKey,
    /// Sessions logged
    pub session_count: MetricComparison,
    /// Intervals per session
    pub average_intervals: MetricComparison,
    /// Work interval minutes per session
    pub average_work_time: MetricComparison,
    /// Mean BPM, only when both months recorded heart rate; positive delta means lower
    pub average_heart_rate: Option<MetricComparison>,
    /// Miles per running session, only when both months have run metrics
    pub average_run_distance: Option<MetricComparison>,
    /// Run pace, only when both months recorded paces; positive delta means faster
    pub average_run_pace: Option<MetricComparison>,
    /// Current month type breakdown
    pub type_breakdown: Vec<BreakdownEntry>,
}

/// HIIT statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitStats {
    /// Month summaries in chronological order
    pub months: Vec<HiitMonthSummary>,
    /// Month-over-month comparison
    pub progress: ProgressReport<HiitComparison>,
    /// HIIT records excluded from the months
    pub data_quality: Vec<DataQualityIssue>,
}

/// Aggregate HIIT records by month and compare the latest two months
#[must_use]
pub fn compute_hiit_stats(records: &[WorkoutRecord], config: &StatsConfig) -> HiitStats {
    let dated = partition_dated(records, WorkoutType::Hiit);
    let mut months: BTreeMap<MonthKey, HiitMonth> = BTreeMap::new();

    for (keys, record) in dated.entries {
        let Some(session) = record.as_hiit() else {
            continue;
        };
        months
            .entry(keys.month)
            .or_insert_with(|| HiitMonth {
                month_name: keys.month_name,
                year: keys.year,
                ..HiitMonth::default()
            })
            .add(session, config);
    }

    let summaries: Vec<HiitMonthSummary> = months
        .iter()
        .map(|(&key, month)| month.summary(key))
        .collect();
    let progress = compare_latest(&summaries, config);
    debug!(
        months = summaries.len(),
        ready = progress.is_ready(),
        "Computed HIIT stats"
    );

    HiitStats {
        months: summaries,
        progress,
        data_quality: dated.issues,
    }
}

fn compare_latest(
    months: &[HiitMonthSummary],
    config: &StatsConfig,
) -> ProgressReport<HiitComparison> {
    let months_available = months.len();
    let [.., previous, current] = months else {
        return ProgressReport::NeedMoreData { months_available };
    };
    if months_available < config.min_comparison_months {
        return ProgressReport::NeedMoreData { months_available };
    }

    let average_heart_rate = (current.heart_rate_samples > 0 && previous.heart_rate_samples > 0)
        .then(|| {
            MetricComparison::lower_is_better(
                current.average_heart_rate,
                previous.average_heart_rate,
                precision::HEART_RATE,
            )
        });

    let (average_run_distance, average_run_pace) = match (&current.run, &previous.run) {
        (Some(current_run), Some(previous_run)) => (
            Some(MetricComparison::higher_is_better(
                current_run.average_distance,
                previous_run.average_distance,
                precision::RUN_METRIC,
            )),
            (current_run.pace_samples > 0 && previous_run.pace_samples > 0).then(|| {
                MetricComparison::lower_is_better(
                    current_run.average_pace,
                    previous_run.average_pace,
                    precision::RUN_METRIC,
                )
            }),
        ),
        _ => (None, None),
    };

    ProgressReport::Ready(HiitComparison {
        current_month: current.month,
        previous_month: previous.month,
        session_count: MetricComparison::higher_is_better(
            f64::from(current.workout_count),
            f64::from(previous.workout_count),
            precision::COUNT,
        ),
        average_intervals: MetricComparison::higher_is_better(
            current.average_intervals,
            previous.average_intervals,
            precision::HIIT_AVERAGE,
        ),
        average_work_time: MetricComparison::higher_is_better(
            current.average_work_time,
            previous.average_work_time,
            precision::HIIT_AVERAGE,
        ),
        average_heart_rate,
        average_run_distance,
        average_run_pace,
        type_breakdown: current.type_breakdown.clone(),
    })
}
