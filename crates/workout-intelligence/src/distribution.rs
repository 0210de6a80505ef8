// ABOUTME: Workout type distribution across the whole history
// ABOUTME: Counts every record by type regardless of date validity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_core::models::{WorkoutRecord, WorkoutType};

/// Session counts per workout type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkoutDistribution {
    /// Strength sessions
    pub strength: usize,
    /// Walking sessions
    pub walking: usize,
    /// HIIT sessions
    pub hiit: usize,
    /// Yoga sessions
    pub yoga: usize,
}

impl WorkoutDistribution {
    /// Count for one type
    #[must_use]
    pub const fn count(&self, workout_type: WorkoutType) -> usize {
        match workout_type {
            WorkoutType::Strength => self.strength,
            WorkoutType::Walking => self.walking,
            WorkoutType::Hiit => self.hiit,
            WorkoutType::Yoga => self.yoga,
        }
    }

    /// Sum of all counts
    #[must_use]
    pub const fn total(&self) -> usize {
        self.strength + self.walking + self.hiit + self.yoga
    }

    /// `(type, count)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (WorkoutType, usize)> + '_ {
        WorkoutType::ALL
            .into_iter()
            .map(|workout_type| (workout_type, self.count(workout_type)))
    }
}

/// Count records by type
#[must_use]
pub fn summarize_distribution(records: &[WorkoutRecord]) -> WorkoutDistribution {
    records
        .iter()
        .fold(WorkoutDistribution::default(), |mut counts, record| {
            match record.workout_type() {
                WorkoutType::Strength => counts.strength += 1,
                WorkoutType::Walking => counts.walking += 1,
                WorkoutType::Hiit => counts.hiit += 1,
                WorkoutType::Yoga => counts.yoga += 1,
            }
            counts
        })
}
