// ABOUTME: Workout record model shared by the store, the history view, and the stats engine
// ABOUTME: Decodes the stored {id, date, type, data} shape into a typed payload enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::payload::{HiitPayload, StrengthPayload, WalkingPayload, YogaPayload};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Kind of workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Weight training
    Strength,
    /// Walking
    Walking,
    /// High-intensity interval training
    Hiit,
    /// Yoga practice
    Yoga,
}

impl WorkoutType {
    /// All workout types in display order
    pub const ALL: [Self; 4] = [Self::Strength, Self::Walking, Self::Hiit, Self::Yoga];

    /// Stored name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Walking => "walking",
            Self::Hiit => "hiit",
            Self::Yoga => "yoga",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "walking" => Ok(Self::Walking),
            "hiit" => Ok(Self::Hiit),
            "yoga" => Ok(Self::Yoga),
            other => Err(format!("Unknown workout type: {other}")),
        }
    }
}

/// Type-specific session data
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutData {
    /// Strength session
    Strength(StrengthPayload),
    /// Walking session
    Walking(WalkingPayload),
    /// HIIT session
    Hiit(HiitPayload),
    /// Yoga session
    Yoga(YogaPayload),
}

impl WorkoutData {
    /// Workout type of this payload
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Strength(_) => WorkoutType::Strength,
            Self::Walking(_) => WorkoutType::Walking,
            Self::Hiit(_) => WorkoutType::Hiit,
            Self::Yoga(_) => WorkoutType::Yoga,
        }
    }

    fn from_json(workout_type: WorkoutType, data: Value) -> Result<Self, serde_json::Error> {
        // A record saved without any payload still decodes; its fields are all absent
        let data = if data.is_null() {
            Value::Object(Map::new())
        } else {
            data
        };
        Ok(match workout_type {
            WorkoutType::Strength => Self::Strength(serde_json::from_value(data)?),
            WorkoutType::Walking => Self::Walking(serde_json::from_value(data)?),
            WorkoutType::Hiit => Self::Hiit(serde_json::from_value(data)?),
            WorkoutType::Yoga => Self::Yoga(serde_json::from_value(data)?),
        })
    }
}

/// A logged workout session
///
/// Immutable once created; the store may only delete whole records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "StoredWorkoutRecord")]
pub struct WorkoutRecord {
    /// Creation timestamp in epoch milliseconds, unique per record
    pub id: i64,
    /// Calendar date as entered (`YYYY-MM-DD`, local time, no timezone)
    pub date: String,
    /// Session payload
    pub data: WorkoutData,
}

impl WorkoutRecord {
    /// Create a record
    #[must_use]
    pub fn new(id: i64, date: impl Into<String>, data: WorkoutData) -> Self {
        Self {
            id,
            date: date.into(),
            data,
        }
    }

    /// Workout type of this record
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        self.data.workout_type()
    }

    /// Strength payload, if this is a strength record
    #[must_use]
    pub const fn as_strength(&self) -> Option<&StrengthPayload> {
        match &self.data {
            WorkoutData::Strength(payload) => Some(payload),
            _ => None,
        }
    }

    /// Walking payload, if this is a walking record
    #[must_use]
    pub const fn as_walking(&self) -> Option<&WalkingPayload> {
        match &self.data {
            WorkoutData::Walking(payload) => Some(payload),
            _ => None,
        }
    }

    /// HIIT payload, if this is a HIIT record
    #[must_use]
    pub const fn as_hiit(&self) -> Option<&HiitPayload> {
        match &self.data {
            WorkoutData::Hiit(payload) => Some(payload),
            _ => None,
        }
    }

    /// Yoga payload, if this is a yoga record
    #[must_use]
    pub const fn as_yoga(&self) -> Option<&YogaPayload> {
        match &self.data {
            WorkoutData::Yoga(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Wire shape of a record in the stored JSON blob
#[derive(Deserialize)]
struct StoredWorkoutRecord {
    id: i64,
    #[serde(default)]
    date: String,
    #[serde(rename = "type")]
    workout_type: WorkoutType,
    #[serde(default)]
    data: Value,
}

impl TryFrom<StoredWorkoutRecord> for WorkoutRecord {
    type Error = serde_json::Error;

    fn try_from(stored: StoredWorkoutRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: stored.id,
            date: stored.date,
            data: WorkoutData::from_json(stored.workout_type, stored.data)?,
        })
    }
}

impl Serialize for WorkoutRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("WorkoutRecord", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("type", &self.workout_type())?;
        match &self.data {
            WorkoutData::Strength(payload) => state.serialize_field("data", payload)?,
            WorkoutData::Walking(payload) => state.serialize_field("data", payload)?,
            WorkoutData::Hiit(payload) => state.serialize_field("data", payload)?,
            WorkoutData::Yoga(payload) => state.serialize_field("data", payload)?,
        }
        state.end()
    }
}
