// ABOUTME: Type-specific workout payloads for strength, walking, HIIT, and yoga sessions
// ABOUTME: Fields decode leniently so malformed entries are detected per record, not per snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::fields;
use super::plan::PlanId;
use serde::{Deserialize, Serialize};

/// One set of a strength exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Load in pounds
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
    /// Repetitions performed
    #[serde(
        default,
        deserialize_with = "fields::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub reps: Option<u32>,
}

impl SetEntry {
    /// Create a set with both weight and reps recorded
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight: Some(weight),
            reps: Some(reps),
        }
    }

    /// Training volume of this set (`weight × reps`); absent values count as zero
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight.unwrap_or(0.0) * f64::from(self.reps.unwrap_or(0))
    }
}

/// A named exercise with its ordered sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name as entered (e.g. "Bench Press")
    #[serde(default)]
    pub name: String,
    /// Ordered sets; `None` when the stored value was not a list
    #[serde(
        default,
        deserialize_with = "fields::optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub sets: Option<Vec<SetEntry>>,
}

impl Exercise {
    /// Create an exercise with an empty set list
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Some(Vec::new()),
        }
    }

    /// Append a set
    #[must_use]
    pub fn with_set(mut self, weight: f64, reps: u32) -> Self {
        self.sets
            .get_or_insert_with(Vec::new)
            .push(SetEntry::new(weight, reps));
        self
    }

    /// Recorded sets, empty when none were stored
    #[must_use]
    pub fn sets(&self) -> &[SetEntry] {
        self.sets.as_deref().unwrap_or_default()
    }
}

/// Strength session payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthPayload {
    /// Workout plan the session followed
    #[serde(
        default,
        deserialize_with = "PlanId::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub plan: Option<PlanId>,
    /// Exercises performed; `None` when the stored value was not a list
    #[serde(
        default,
        deserialize_with = "fields::optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub exercises: Option<Vec<Exercise>>,
}

impl StrengthPayload {
    /// Create an empty session for a plan
    #[must_use]
    pub const fn new(plan: PlanId) -> Self {
        Self {
            plan: Some(plan),
            exercises: Some(Vec::new()),
        }
    }

    /// Append an exercise
    #[must_use]
    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercises.get_or_insert_with(Vec::new).push(exercise);
        self
    }

    /// Recorded exercises, empty when none were stored
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        self.exercises.as_deref().unwrap_or_default()
    }
}

/// Walking session payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkingPayload {
    /// Distance in miles
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<f64>,
    /// Duration in minutes
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
    /// Pace as entered (min/mi); statistics derive pace from distance and duration
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub pace: Option<f64>,
    /// Average heart rate (BPM)
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub heart_rate: Option<f64>,
}

impl WalkingPayload {
    /// Create a walk with distance (miles) and duration (minutes)
    #[must_use]
    pub const fn new(distance: f64, duration: f64) -> Self {
        Self {
            distance: Some(distance),
            duration: Some(duration),
            pace: None,
            heart_rate: None,
        }
    }

    /// Set the entered pace
    #[must_use]
    pub const fn with_pace(mut self, pace: f64) -> Self {
        self.pace = Some(pace);
        self
    }

    /// Set the average heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, heart_rate: f64) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }
}

/// HIIT session payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitPayload {
    /// Free-text HIIT type ("Stationary Bike", "Run", ...)
    #[serde(
        default,
        deserialize_with = "fields::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hiit_type: Option<String>,
    /// Number of work intervals
    #[serde(
        default,
        deserialize_with = "fields::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub intervals: Option<u32>,
    /// Work interval length (minutes)
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_time: Option<f64>,
    /// Rest interval length (minutes)
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub rest_time: Option<f64>,
    /// Average heart rate (BPM)
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub heart_rate: Option<f64>,
    /// Whole session length (minutes)
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_duration: Option<f64>,
    /// Run distance (miles), running sessions only
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<f64>,
    /// Pace during work intervals (min/mi), running sessions only
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_pace: Option<f64>,
    /// Pace during rest intervals (min/mi), running sessions only
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub rest_pace: Option<f64>,
    /// Average pace over the session (min/mi), running sessions only
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_pace: Option<f64>,
}

impl HiitPayload {
    /// Create a session with its interval structure
    #[must_use]
    pub fn new(
        hiit_type: impl Into<String>,
        intervals: u32,
        work_time: f64,
        rest_time: f64,
    ) -> Self {
        Self {
            hiit_type: Some(hiit_type.into()),
            intervals: Some(intervals),
            work_time: Some(work_time),
            rest_time: Some(rest_time),
            ..Self::default()
        }
    }

    /// Set the average heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, heart_rate: f64) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }

    /// Set the whole session length
    #[must_use]
    pub const fn with_total_duration(mut self, minutes: f64) -> Self {
        self.total_duration = Some(minutes);
        self
    }

    /// Set run distance and average pace
    #[must_use]
    pub const fn with_run(mut self, distance: f64, avg_pace: Option<f64>) -> Self {
        self.distance = Some(distance);
        self.avg_pace = avg_pace;
        self
    }
}

/// Yoga session payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YogaPayload {
    /// Practice style ("Vinyasa", "Yin", ...)
    #[serde(
        default,
        deserialize_with = "fields::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<String>,
    /// Number of poses, absent when recorded as "N/A"
    #[serde(
        default,
        deserialize_with = "fields::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub poses: Option<u32>,
    /// Session length (minutes)
    #[serde(
        default,
        deserialize_with = "fields::optional_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
}

impl YogaPayload {
    /// Create a session with style and duration
    #[must_use]
    pub fn new(style: impl Into<String>, duration: f64) -> Self {
        Self {
            style: Some(style.into()),
            poses: None,
            duration: Some(duration),
        }
    }

    /// Set the number of poses
    #[must_use]
    pub const fn with_poses(mut self, poses: u32) -> Self {
        self.poses = Some(poses);
        self
    }
}
