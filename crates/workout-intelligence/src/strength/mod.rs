// ABOUTME: Strength aggregation by month and ISO week with volume and personal record detection
// ABOUTME: Builds per-exercise cards for the latest month grouped by movement category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Training Statistics
//!
//! Records are grouped by calendar month and, inside each month, by ISO
//! week. Each month tracks per-exercise totals; a month is a personal record
//! for an exercise when its heaviest set beats every earlier month.

/// Exercise group classification
pub mod classification;

pub use classification::{classify_exercise, group_exercises};

use crate::calendar::{MonthKey, WeekKey};
use crate::comparison::{mean, round_to, MetricComparison, ProgressReport};
use crate::config::StatsConfig;
use crate::quality::{partition_dated, DataQualityIssue};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;
use workout_core::constants::precision;
use workout_core::models::{Exercise, StrengthPayload, WorkoutRecord, WorkoutType};

/// Totals for one exercise within a month
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMonthStats {
    /// Sets performed
    pub total_sets: u64,
    /// Repetitions performed
    pub total_reps: u64,
    /// Sum of `weight × reps` over all sets (lbs)
    pub total_volume: f64,
    /// Heaviest single set (lbs)
    pub max_weight: f64,
    /// Sessions that included the exercise
    pub workout_count: u32,
    /// Heaviest set beats every earlier month
    pub personal_record: bool,
}

impl ExerciseMonthStats {
    fn add(&mut self, exercise: &Exercise) {
        self.workout_count = self.workout_count.saturating_add(1);
        let sets = exercise.sets();
        self.total_sets = self.total_sets.saturating_add(sets.len() as u64);
        for set in sets {
            let weight = set.weight.unwrap_or(0.0);
            self.total_reps = self
                .total_reps
                .saturating_add(u64::from(set.reps.unwrap_or(0)));
            self.total_volume += set.volume();
            if weight > self.max_weight {
                self.max_weight = weight;
            }
        }
    }

    /// Volume per repetition; 0 without reps
    #[must_use]
    pub fn average_weight_per_rep(&self) -> f64 {
        if self.total_reps == 0 {
            0.0
        } else {
            self.total_volume / self.total_reps as f64
        }
    }

    /// Volume per session that included the exercise
    #[must_use]
    pub fn average_volume_per_workout(&self) -> f64 {
        mean(self.total_volume, self.workout_count)
    }
}

/// Totals for one exercise within a week
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekExerciseStats {
    /// Sets performed
    pub total_sets: u64,
    /// Repetitions performed
    pub total_reps: u64,
    /// Sum of `weight × reps` (lbs)
    pub total_volume: f64,
}

impl WeekExerciseStats {
    fn add(&mut self, exercise: &Exercise) {
        let sets = exercise.sets();
        self.total_sets = self.total_sets.saturating_add(sets.len() as u64);
        for set in sets {
            self.total_reps = self
                .total_reps
                .saturating_add(u64::from(set.reps.unwrap_or(0)));
            self.total_volume += set.volume();
        }
    }
}

/// Sessions and exercise totals for one ISO week
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    /// Sessions logged in the week
    pub workout_count: u32,
    /// Exercise totals, first-seen order
    pub exercises: IndexMap<String, WeekExerciseStats>,
}

/// Strength totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthMonth {
    /// English month name
    pub month_name: &'static str,
    /// Calendar year
    pub year: i32,
    /// Sessions logged in the month
    pub workout_count: u32,
    /// Exercise totals, first-seen order
    pub exercises: IndexMap<String, ExerciseMonthStats>,
    /// ISO weeks touched by the month, first-seen order
    pub weeks: IndexMap<WeekKey, WeekBucket>,
}

impl StrengthMonth {
    fn new(month_name: &'static str, year: i32) -> Self {
        Self {
            month_name,
            year,
            workout_count: 0,
            exercises: IndexMap::new(),
            weeks: IndexMap::new(),
        }
    }

    fn add(&mut self, week: WeekKey, session: &StrengthPayload) {
        self.workout_count += 1;
        let week_bucket = self.weeks.entry(week).or_default();
        week_bucket.workout_count += 1;

        for exercise in session.exercises() {
            self.exercises
                .entry(exercise.name.clone())
                .or_default()
                .add(exercise);
            week_bucket
                .exercises
                .entry(exercise.name.clone())
                .or_default()
                .add(exercise);
        }
    }
}

/// Month-over-month changes for one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseComparison {
    /// Volume per repetition (lbs)
    pub average_weight_per_rep: MetricComparison,
    /// Volume per session (lbs)
    pub average_volume_per_workout: MetricComparison,
}

/// Latest-month card for one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCard {
    /// Exercise name
    pub name: String,
    /// Sets per ISO week touched by the month
    pub sets_per_week: f64,
    /// Repetitions per ISO week touched by the month
    pub reps_per_week: f64,
    /// Sets per session that included the exercise
    pub sets_per_workout: f64,
    /// Repetitions per session that included the exercise
    pub reps_per_workout: f64,
    /// Volume per repetition (lbs)
    pub average_weight_per_rep: f64,
    /// Sum of `weight × reps` (lbs)
    pub total_volume: f64,
    /// Heaviest single set (lbs)
    pub max_weight: f64,
    /// Heaviest set beats every earlier month
    pub personal_record: bool,
    /// Changes since last month, when the exercise was done then
    pub comparison: Option<ExerciseComparison>,
}

/// Exercise cards of one movement group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroupReport {
    /// Group name
    pub name: String,
    /// Cards in first-seen order
    pub exercises: Vec<ExerciseCard>,
}

/// Strength report for the latest month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Latest month
    pub current_month: MonthKey,
    /// English month name
    pub month_name: &'static str,
    /// Calendar year
    pub year: i32,
    /// Sessions logged in the month
    pub workout_count: u32,
    /// ISO weeks touched by the month
    pub weeks_in_month: usize,
    /// Month the cards are compared against
    pub previous_month: Option<MonthKey>,
    /// Groups in order of their first exercise
    pub groups: Vec<ExerciseGroupReport>,
}

impl StrengthReport {
    /// Card for an exercise, searching every group
    #[must_use]
    pub fn card(&self, exercise_name: &str) -> Option<&ExerciseCard> {
        self.groups
            .iter()
            .flat_map(|group| &group.exercises)
            .find(|card| card.name == exercise_name)
    }
}

/// Strength statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthStats {
    /// Month totals in chronological order
    pub months: BTreeMap<MonthKey, StrengthMonth>,
    /// Latest month report
    pub progress: ProgressReport<StrengthReport>,
    /// Strength records excluded from the months
    pub data_quality: Vec<DataQualityIssue>,
}

/// Aggregate strength records and build the latest month's exercise cards
#[must_use]
pub fn compute_strength_stats(records: &[WorkoutRecord], config: &StatsConfig) -> StrengthStats {
    let dated = partition_dated(records, WorkoutType::Strength);
    let mut months: BTreeMap<MonthKey, StrengthMonth> = BTreeMap::new();

    for (keys, record) in dated.entries {
        let Some(session) = record.as_strength() else {
            continue;
        };
        months
            .entry(keys.month)
            .or_insert_with(|| StrengthMonth::new(keys.month_name, keys.year))
            .add(keys.week, session);
    }

    mark_personal_records(&mut months);
    let progress = build_report(&months, config);
    debug!(
        months = months.len(),
        ready = progress.is_ready(),
        "Computed strength stats"
    );

    StrengthStats {
        months,
        progress,
        data_quality: dated.issues,
    }
}

/// Flag each month whose heaviest set beats every earlier month
///
/// The running maximum starts at zero, so the first month with a positive
/// weight is always flagged and a dip below an earlier peak never is.
pub fn mark_personal_records(months: &mut BTreeMap<MonthKey, StrengthMonth>) {
    let names: IndexSet<String> = months
        .values()
        .flat_map(|month| month.exercises.keys().cloned())
        .collect();

    for name in &names {
        let mut best = 0.0_f64;
        for month in months.values_mut() {
            if let Some(stats) = month.exercises.get_mut(name) {
                if stats.max_weight > best {
                    stats.personal_record = true;
                    best = stats.max_weight;
                }
            }
        }
    }
}

fn build_report(
    months: &BTreeMap<MonthKey, StrengthMonth>,
    config: &StatsConfig,
) -> ProgressReport<StrengthReport> {
    let mut latest = months.iter().rev();
    let Some((&current_key, current)) = latest.next() else {
        return ProgressReport::NoData;
    };
    let previous = latest.next();

    let groups = group_exercises(
        current.exercises.keys().map(String::as_str),
        &config.exercise_groups,
    )
    .into_iter()
    .map(|(name, exercises)| ExerciseGroupReport {
        name,
        exercises: exercises
            .into_iter()
            .filter_map(|exercise| {
                let stats = current.exercises.get(exercise)?;
                let previous_stats = previous.and_then(|(_, month)| month.exercises.get(exercise));
                Some(exercise_card(exercise, stats, current.weeks.len(), previous_stats))
            })
            .collect(),
    })
    .collect();

    ProgressReport::Ready(StrengthReport {
        current_month: current_key,
        month_name: current.month_name,
        year: current.year,
        workout_count: current.workout_count,
        weeks_in_month: current.weeks.len(),
        previous_month: previous.map(|(&key, _)| key),
        groups,
    })
}

fn exercise_card(
    name: &str,
    stats: &ExerciseMonthStats,
    weeks_in_month: usize,
    previous: Option<&ExerciseMonthStats>,
) -> ExerciseCard {
    let total_sets = stats.total_sets as f64;
    let total_reps = stats.total_reps as f64;
    let weeks = weeks_in_month.max(1) as f64;

    ExerciseCard {
        name: name.to_owned(),
        sets_per_week: round_to(total_sets / weeks, precision::STRENGTH_AVERAGE),
        reps_per_week: round_to(total_reps / weeks, precision::STRENGTH_AVERAGE),
        sets_per_workout: round_to(
            mean(total_sets, stats.workout_count),
            precision::STRENGTH_AVERAGE,
        ),
        reps_per_workout: round_to(
            mean(total_reps, stats.workout_count),
            precision::STRENGTH_AVERAGE,
        ),
        average_weight_per_rep: round_to(
            stats.average_weight_per_rep(),
            precision::STRENGTH_AVERAGE,
        ),
        total_volume: round_to(stats.total_volume, precision::VOLUME),
        max_weight: stats.max_weight,
        personal_record: stats.personal_record,
        comparison: previous.map(|previous| ExerciseComparison {
            average_weight_per_rep: MetricComparison::higher_is_better(
                stats.average_weight_per_rep(),
                previous.average_weight_per_rep(),
                precision::STRENGTH_AVERAGE,
            ),
            average_volume_per_workout: MetricComparison::higher_is_better(
                stats.average_volume_per_workout(),
                previous.average_volume_per_workout(),
                precision::VOLUME,
            ),
        }),
    }
}
