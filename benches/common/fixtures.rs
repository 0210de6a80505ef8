// ABOUTME: Benchmark fixtures generating realistic mixed workout histories
// ABOUTME: Deterministic generation keeps measurements reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic workout histories.

use chrono::{Days, NaiveDate};
use workout_tracker::models::{
    Exercise, HiitPayload, PlanId, StrengthPayload, WalkingPayload, WorkoutData, WorkoutRecord,
    YogaPayload,
};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few weeks of logging
    Small,
    /// About a year of near-daily logging
    Medium,
    /// Several years of logging
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 300,
            Self::Large => 2000,
        }
    }
}

const STRENGTH_EXERCISES: [&str; 6] = [
    "Bench Press",
    "Barbell Row",
    "Back Squat",
    "Romanian Deadlift",
    "Plank",
    "Bicep Curl",
];

const HIIT_TYPES: [&str; 3] = ["Tabata", "Run", "EMOM"];
const YOGA_STYLES: [&str; 3] = ["Vinyasa", "Hatha", "Yin"];

fn date_for(index: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let offset = u64::try_from(index).unwrap_or(0);
    base.checked_add_days(Days::new(offset))
        .unwrap_or(base)
        .format("%Y-%m-%d")
        .to_string()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn strength_session(index: usize) -> WorkoutData {
    let plan = PlanId::ALL[index % PlanId::ALL.len()];
    let payload = STRENGTH_EXERCISES
        .iter()
        .skip(index % 2)
        .step_by(2)
        .fold(StrengthPayload::new(plan), |payload, name| {
            let weight = 45.0 + ((index * 37) % 200) as f64;
            let reps = 5 + (index % 6) as u32;
            payload.with_exercise(
                Exercise::new(*name)
                    .with_set(weight, reps)
                    .with_set(weight + 10.0, reps)
                    .with_set(weight + 20.0, reps.saturating_sub(2)),
            )
        });
    WorkoutData::Strength(payload)
}

#[allow(clippy::cast_precision_loss)]
fn walking_session(index: usize) -> WorkoutData {
    let distance = 1.0 + ((index * 13) % 50) as f64 / 10.0;
    let duration = distance * (13.0 + ((index * 7) % 50) as f64 / 10.0);
    WorkoutData::Walking(WalkingPayload::new(distance, duration))
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn hiit_session(index: usize) -> WorkoutData {
    let hiit_type = HIIT_TYPES[index % HIIT_TYPES.len()];
    let mut payload = HiitPayload::new(hiit_type, 6 + (index % 10) as u32, 0.5, 0.25)
        .with_heart_rate(140.0 + ((index * 11) % 40) as f64)
        .with_total_duration(20.0 + (index % 15) as f64);
    if hiit_type == "Run" {
        payload = payload.with_run(2.0 + ((index * 3) % 30) as f64 / 10.0, Some(8.5));
    }
    WorkoutData::Hiit(payload)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn yoga_session(index: usize) -> WorkoutData {
    let style = YOGA_STYLES[(index / 4) % YOGA_STYLES.len()];
    WorkoutData::Yoga(
        YogaPayload::new(style, 30.0 + ((index * 5) % 45) as f64)
            .with_poses(10 + (index % 12) as u32),
    )
}

/// Generate a mixed history of `count` records, one per day
#[must_use]
pub fn generate_history(count: usize) -> Vec<WorkoutRecord> {
    (0..count)
        .map(|index| {
            let data = match index % 4 {
                0 => strength_session(index),
                1 => walking_session(index),
                2 => hiit_session(index),
                _ => yoga_session(index),
            };
            let id = i64::try_from(index).unwrap_or(i64::MAX);
            WorkoutRecord::new(id + 1, date_for(index), data)
        })
        .collect()
}

/// Generate a history for a predefined size
#[must_use]
pub fn generate_sized_history(size: HistorySize) -> Vec<WorkoutRecord> {
    generate_history(size.count())
}
