// ABOUTME: Per-record detail formatting for the workout history view
// ABOUTME: Validates required payload fields and builds a newest-first history list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::parse_workout_date;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use workout_core::constants::{labels::NOT_AVAILABLE, messages};
use workout_core::models::{
    HiitPayload, PlanId, StrengthPayload, WalkingPayload, WorkoutData, WorkoutRecord, WorkoutType,
    YogaPayload,
};

/// Record whose payload lacks a field the history view requires
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Invalid {workout_type} data")]
#[serde(rename_all = "camelCase")]
pub struct InvalidRecord {
    /// Id of the record
    pub record_id: i64,
    /// Type of the record
    pub workout_type: WorkoutType,
    /// First required field found missing
    pub missing_field: &'static str,
}

/// One set line of a strength exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLine {
    /// 1-based set number
    pub number: usize,
    /// Load in pounds
    pub weight: Option<f64>,
    /// Repetitions
    pub reps: Option<u32>,
}

/// One exercise of a strength record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLine {
    /// Exercise name
    pub name: String,
    /// Set lines; `None` when no set list was stored
    pub sets: Option<Vec<SetLine>>,
}

/// Validated, display-ready details of a record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RecordDetails {
    /// Strength session
    Strength {
        /// Plan followed
        plan: PlanId,
        /// Exercises in order
        exercises: Vec<ExerciseLine>,
    },
    /// Walk
    #[serde(rename_all = "camelCase")]
    Walking {
        /// Miles
        distance: f64,
        /// Minutes
        duration: f64,
        /// Entered pace (min/mi)
        pace: Option<f64>,
        /// Average BPM
        heart_rate: Option<f64>,
    },
    /// HIIT session
    #[serde(rename_all = "camelCase")]
    Hiit {
        /// HIIT type
        hiit_type: Option<String>,
        /// Work intervals
        intervals: u32,
        /// Work interval minutes
        work_time: f64,
        /// Rest interval minutes
        rest_time: f64,
        /// Average BPM
        heart_rate: Option<f64>,
        /// Run distance (miles)
        distance: Option<f64>,
        /// Run average pace (min/mi)
        avg_pace: Option<f64>,
        /// Session minutes
        total_duration: Option<f64>,
    },
    /// Yoga session
    Yoga {
        /// Practice style
        style: String,
        /// Pose count
        poses: Option<u32>,
        /// Minutes
        duration: f64,
    },
}

/// Value or the `N/A` marker
struct OrNotAvailable<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrNotAvailable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}

struct OptionalField<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OptionalField<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("Unknown"),
        }
    }
}

impl fmt::Display for RecordDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength { plan, exercises } => {
                write!(f, "Plan: {plan}")?;
                for (index, exercise) in exercises.iter().enumerate() {
                    write!(f, "\n{}. {}:", index + 1, exercise.name)?;
                    match &exercise.sets {
                        Some(sets) => {
                            for set in sets {
                                write!(
                                    f,
                                    "\n   Set {}: {} lbs × {} reps",
                                    set.number,
                                    OrNotAvailable(set.weight),
                                    OrNotAvailable(set.reps)
                                )?;
                            }
                        }
                        None => write!(f, "\n   {}", messages::NO_SETS_RECORDED)?,
                    }
                }
                Ok(())
            }
            Self::Walking {
                distance,
                duration,
                pace,
                heart_rate,
            } => write!(
                f,
                "Distance: {distance} miles, Duration: {duration} min, Pace: {} min/mile, HR: {} BPM",
                OrNotAvailable(*pace),
                OrNotAvailable(*heart_rate)
            ),
            Self::Hiit {
                hiit_type,
                intervals,
                work_time,
                rest_time,
                heart_rate,
                distance,
                avg_pace,
                total_duration,
            } => {
                write!(
                    f,
                    "Type: {}, Intervals: {intervals}, Work: {work_time} min, Rest: {rest_time} min",
                    OptionalField(hiit_type)
                )?;
                if let Some(heart_rate) = heart_rate {
                    write!(f, ", HR: {heart_rate} BPM")?;
                }
                if let Some(distance) = distance {
                    write!(
                        f,
                        ", Distance: {distance} miles, Avg Pace: {} min/mile",
                        OrNotAvailable(*avg_pace)
                    )?;
                }
                write!(f, ", Total: {} min", OptionalField(total_duration))
            }
            Self::Yoga {
                style,
                poses,
                duration,
            } => write!(
                f,
                "Style: {style}, Poses: {}, Duration: {duration} min",
                OrNotAvailable(*poses)
            ),
        }
    }
}

/// Validate a record and extract its display details
///
/// # Errors
///
/// Returns [`InvalidRecord`] when a field the history view requires is
/// missing or zero.
pub fn describe_record(record: &WorkoutRecord) -> Result<RecordDetails, InvalidRecord> {
    let invalid = |missing_field: &'static str| InvalidRecord {
        record_id: record.id,
        workout_type: record.workout_type(),
        missing_field,
    };

    match &record.data {
        WorkoutData::Strength(session) => describe_strength(session).map_err(invalid),
        WorkoutData::Walking(walk) => describe_walking(walk).map_err(invalid),
        WorkoutData::Hiit(session) => describe_hiit(session).map_err(invalid),
        WorkoutData::Yoga(session) => describe_yoga(session).map_err(invalid),
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn describe_strength(session: &StrengthPayload) -> Result<RecordDetails, &'static str> {
    let plan = session.plan.ok_or("plan")?;
    let exercises = session.exercises.as_ref().ok_or("exercises")?;

    Ok(RecordDetails::Strength {
        plan,
        exercises: exercises
            .iter()
            .map(|exercise| ExerciseLine {
                name: exercise.name.clone(),
                sets: exercise.sets.as_ref().map(|sets| {
                    sets.iter()
                        .enumerate()
                        .map(|(index, set)| SetLine {
                            number: index + 1,
                            weight: set.weight,
                            reps: set.reps,
                        })
                        .collect()
                }),
            })
            .collect(),
    })
}

fn describe_walking(walk: &WalkingPayload) -> Result<RecordDetails, &'static str> {
    Ok(RecordDetails::Walking {
        distance: present(walk.distance).ok_or("distance")?,
        duration: present(walk.duration).ok_or("duration")?,
        pace: present(walk.pace),
        heart_rate: present(walk.heart_rate),
    })
}

fn describe_hiit(session: &HiitPayload) -> Result<RecordDetails, &'static str> {
    Ok(RecordDetails::Hiit {
        intervals: session
            .intervals
            .filter(|intervals| *intervals > 0)
            .ok_or("intervals")?,
        work_time: present(session.work_time).ok_or("workTime")?,
        rest_time: present(session.rest_time).ok_or("restTime")?,
        hiit_type: session.hiit_type.clone(),
        heart_rate: present(session.heart_rate),
        distance: present(session.distance),
        avg_pace: present(session.avg_pace),
        total_duration: present(session.total_duration),
    })
}

fn describe_yoga(session: &YogaPayload) -> Result<RecordDetails, &'static str> {
    Ok(RecordDetails::Yoga {
        style: session.style.clone().ok_or("style")?,
        poses: session.poses.filter(|poses| *poses > 0),
        duration: present(session.duration).ok_or("duration")?,
    })
}

/// One row of the history view
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Record id, used for deletion
    pub record_id: i64,
    /// Date as stored
    pub date: String,
    /// Workout type
    pub workout_type: WorkoutType,
    /// Details, or why they cannot be shown
    pub details: Result<RecordDetails, InvalidRecord>,
}

impl HistoryEntry {
    /// Display text for the row body
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.details {
            Ok(details) => details.to_string(),
            Err(invalid) => invalid.to_string(),
        }
    }

    /// Whether the record passed validation
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.details.is_ok()
    }
}

/// Build history rows, newest first
///
/// Records with an unparsable date sort after all dated records; ties keep
/// snapshot order. An invalid record never prevents the others from being
/// listed.
#[must_use]
pub fn build_history(records: &[WorkoutRecord]) -> Vec<HistoryEntry> {
    let mut rows: Vec<(Option<NaiveDate>, HistoryEntry)> = records
        .iter()
        .map(|record| {
            let entry = HistoryEntry {
                record_id: record.id,
                date: record.date.clone(),
                workout_type: record.workout_type(),
                details: describe_record(record),
            };
            (parse_workout_date(&record.date).ok(), entry)
        })
        .collect();

    rows.sort_by(|(a, _), (b, _)| b.cmp(a));
    rows.into_iter().map(|(_, entry)| entry).collect()
}
