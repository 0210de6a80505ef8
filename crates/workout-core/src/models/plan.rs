// ABOUTME: Strength workout plan identifiers and remembered exercise templates
// ABOUTME: Templates prefill the entry form with the last session logged for each plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::payload::{SetEntry, StrengthPayload};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Strength plan rotation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlanId {
    /// Plan A
    A,
    /// Plan B
    B,
    /// Plan C
    C,
    /// Plan D
    D,
}

impl PlanId {
    /// All plans in display order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Single-letter label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Decode a plan id, mapping unknown or missing values to `None`
    ///
    /// # Errors
    ///
    /// Only fails when the underlying deserializer cannot produce a JSON value.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(|text| text.parse().ok()))
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(format!("Unknown workout plan: {other}")),
        }
    }
}

/// One exercise of a plan template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanExercise {
    /// Exercise name
    pub name: String,
    /// Sets last performed for this exercise
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

/// Remembered exercise templates keyed by plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutPlans {
    plans: BTreeMap<PlanId, Vec<PlanExercise>>,
}

impl WorkoutPlans {
    /// Template for a plan, empty when none was saved yet
    #[must_use]
    pub fn template(&self, plan: PlanId) -> &[PlanExercise] {
        self.plans
            .get(&plan)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Remember a logged session as the latest template for its plan
    ///
    /// Sessions without a plan are ignored. Returns whether a template changed.
    pub fn remember(&mut self, session: &StrengthPayload) -> bool {
        let Some(plan) = session.plan else {
            return false;
        };
        let template = session
            .exercises()
            .iter()
            .map(|exercise| PlanExercise {
                name: exercise.name.clone(),
                sets: exercise.sets().to_vec(),
            })
            .collect();
        self.plans.insert(plan, template);
        true
    }

    /// Number of plans with a saved template
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether no template has been saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
