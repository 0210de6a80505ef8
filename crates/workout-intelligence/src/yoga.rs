// ABOUTME: Yoga aggregation by calendar month with duration and style frequency
// ABOUTME: Most practiced style uses strict counts so ties resolve to the first style seen
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
use workout_core::models::{WorkoutRecord, WorkoutType};

#[derive(Debug, Clone, Default)]
struct YogaMonth {
    month_name: &'static str,
    year: i32,
    workout_count: u32,
    total_duration: f64,
    styles: IndexMap<String, u32>,
}

impl YogaMonth {
    fn favorite_style(&self) -> String {
        let mut favorite: Option<(&String, u32)> = None;
        for (style, &count) in &self.styles {
            match favorite {
                Some((_, best)) if count <= best => {}
                _ => favorite = Some((style, count)),
            }
        }
        favorite.map(|(style, _)| style.clone()).unwrap_or_default()
    }

    fn summary(&self, key: MonthKey) -> YogaMonthSummary {
        YogaMonthSummary {
            month: key,
            month_name: self.month_name,
            year: self.year,
            workout_count: self.workout_count,
            total_duration: self.total_duration,
            average_duration: mean(self.total_duration, self.workout_count),
            favorite_style: self.favorite_style(),
            style_breakdown: percentage_breakdown(&self.styles, self.workout_count),
        }
    }
}

/// Yoga summary of one month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaMonthSummary {
    /// Month key
    pub month: MonthKey,
    /// English month name
    pub month_name: &'static str,
    /// Calendar year
    pub year: i32,
    /// Sessions logged
    pub workout_count: u32,
    /// Minutes practiced
    pub total_duration: f64,
    /// Minutes per session
    pub average_duration: f64,
    /// Most practiced style
    pub favorite_style: String,
    /// Sessions per style, first-seen order
    pub style_breakdown: Vec<BreakdownEntry>,
}

/// Favorite style compared with the previous month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "camelCase")]
pub enum StyleChange {
    /// Same favorite as last month
    Unchanged,
    /// Favorite differs from last month
    Changed {
        /// Last month's favorite
        previous: String,
    },
}

/// Latest yoga month compared with the month before it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaComparison {
    /// Latest month
    pub current_month: MonthKey,
    /// Month before it
    pub previous_month: MonthKey,
    /// Sessions logged
    pub session_count: MetricComparison,
    /// Minutes practiced
    pub total_duration: MetricComparison,
    /// Minutes per session
    pub average_duration: MetricComparison,
    /// Current month's favorite style
    pub favorite_style: String,
    /// Favorite style relative to last month
    pub favorite_style_change: StyleChange,
    /// Current month style breakdown
    pub style_breakdown: Vec<BreakdownEntry>,
}

/// Yoga statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaStats {
    /// Month summaries in chronological order
    pub months: Vec<YogaMonthSummary>,
    /// Month-over-month comparison
    pub progress: ProgressReport<YogaComparison>,
    /// Yoga records excluded from the months
    pub data_quality: Vec<DataQualityIssue>,
}

/// Aggregate yoga records by month and compare the latest two months
#[must_use]
pub fn compute_yoga_stats(records: &[WorkoutRecord], config: &StatsConfig) -> YogaStats {
    let dated = partition_dated(records, WorkoutType::Yoga);
    let mut months: BTreeMap<MonthKey, YogaMonth> = BTreeMap::new();

    for (keys, record) in dated.entries {
        let Some(session) = record.as_yoga() else {
            continue;
        };
        let bucket = months.entry(keys.month).or_insert_with(|| YogaMonth {
            month_name: keys.month_name,
            year: keys.year,
            ..YogaMonth::default()
        });

        let style = session.style.as_deref().unwrap_or(&config.unknown_label);
        *bucket.styles.entry(style.to_owned()).or_insert(0) += 1;
        bucket.workout_count += 1;
        bucket.total_duration += session.duration.unwrap_or(0.0);
    }

    let summaries: Vec<YogaMonthSummary> = months
        .iter()
        .map(|(&key, month)| month.summary(key))
        .collect();
    let progress = compare_latest(&summaries, config);
    debug!(
        months = summaries.len(),
        ready = progress.is_ready(),
        "Computed yoga stats"
    );

    YogaStats {
        months: summaries,
        progress,
        data_quality: dated.issues,
    }
}

fn compare_latest(
    months: &[YogaMonthSummary],
    config: &StatsConfig,
) -> ProgressReport<YogaComparison> {
    let months_available = months.len();
    let [.., previous, current] = months else {
        return ProgressReport::NeedMoreData { months_available };
    };
    if months_available < config.min_comparison_months {
        return ProgressReport::NeedMoreData { months_available };
    }

    let favorite_style_change = if current.favorite_style == previous.favorite_style {
        StyleChange::Unchanged
    } else {
        StyleChange::Changed {
            previous: previous.favorite_style.clone(),
        }
    };

    ProgressReport::Ready(YogaComparison {
        current_month: current.month,
        previous_month: previous.month,
        session_count: MetricComparison::higher_is_better(
            f64::from(current.workout_count),
            f64::from(previous.workout_count),
            precision::COUNT,
        ),
        total_duration: MetricComparison::higher_is_better(
            current.total_duration,
            previous.total_duration,
            precision::YOGA_DURATION,
        ),
        average_duration: MetricComparison::higher_is_better(
            current.average_duration,
            previous.average_duration,
            precision::YOGA_DURATION,
        ),
        favorite_style: current.favorite_style.clone(),
        favorite_style_change,
        style_breakdown: current.style_breakdown.clone(),
    })
}
