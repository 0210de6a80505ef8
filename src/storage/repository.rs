// ABOUTME: Workout repository over a key-value store with plan template memory
// ABOUTME: Corrupt blobs read as empty; writes edit the raw array and keep unknown elements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::snapshot::{decode_snapshot, Snapshot};
use super::KeyValueStore;
use crate::logging::AppLogger;
use chrono::Utc;
use serde_json::Value;
use tracing::debug;
use workout_core::constants::{labels, storage_keys};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{WorkoutData, WorkoutPlans, WorkoutRecord};
use workout_intelligence::calendar::parse_workout_date;

/// Workout history and plan templates stored in a key-value backend
#[derive(Debug, Clone)]
pub struct WorkoutRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WorkoutRepository<S> {
    /// Wrap a backend
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying backend
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying backend
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the backend
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read and decode the stored history
    ///
    /// A missing blob is an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails, the blob is not JSON, or the
    /// blob is not an array
    pub fn load_snapshot(&self) -> AppResult<Snapshot> {
        let Some(raw) = self.store.get(storage_keys::WORKOUTS)? else {
            return Ok(Snapshot::default());
        };
        let value: Value = serde_json::from_str(&raw)?;
        decode_snapshot(value)
    }

    /// Load every decodable record
    ///
    /// Never fails: an unreadable or corrupt history is logged and treated
    /// as empty.
    pub fn load_all(&self) -> Vec<WorkoutRecord> {
        match self.load_snapshot() {
            Ok(snapshot) => {
                if snapshot.skipped > 0 {
                    AppLogger::log_storage_recovery(
                        storage_keys::WORKOUTS,
                        &format!("skipped {} undecodable records", snapshot.skipped),
                    );
                }
                snapshot.records
            }
            Err(e) => {
                AppLogger::log_storage_recovery(storage_keys::WORKOUTS, &e.to_string());
                Vec::new()
            }
        }
    }

    /// Replace the whole stored history
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    pub fn replace_all(&mut self, records: &[WorkoutRecord]) -> AppResult<()> {
        let json = serde_json::to_string(records)?;
        self.store.set(storage_keys::WORKOUTS, &json)?;
        debug!(records = records.len(), "Replaced stored workouts");
        Ok(())
    }

    /// Read the stored history as raw JSON elements
    ///
    /// Elements that do not decode as workout records are returned as
    /// stored. A missing blob is an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails, the blob is not JSON, or the
    /// blob is not an array
    pub fn load_elements(&self) -> AppResult<Vec<Value>> {
        let Some(raw) = self.store.get(storage_keys::WORKOUTS)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw)? {
            Value::Array(elements) => Ok(elements),
            _ => Err(AppError::invalid_format(
                "Stored workouts must be a JSON array",
            )),
        }
    }

    fn store_elements(&mut self, elements: &[Value]) -> AppResult<()> {
        let json = serde_json::to_string(elements)?;
        self.store.set(storage_keys::WORKOUTS, &json)?;
        debug!(records = elements.len(), "Stored workouts");
        Ok(())
    }

    /// Log a new workout
    ///
    /// The record is appended to the stored array; elements this version
    /// cannot decode are written back untouched. The id is the current time
    /// in epoch milliseconds, bumped past the largest stored id when needed.
    /// Strength sessions with a plan also become that plan's template.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparsable date, an error when
    /// the stored blob is unreadable (it is left in place), or an error if
    /// the backend write fails
    pub fn add_workout(&mut self, date: &str, data: WorkoutData) -> AppResult<WorkoutRecord> {
        parse_workout_date(date)
            .map_err(|e| AppError::invalid_input(e.to_string()).with_source(e))?;

        let mut elements = self.load_elements()?;
        let newest_id = elements.iter().filter_map(stored_id).max().unwrap_or(0);
        let id = Utc::now()
            .timestamp_millis()
            .max(newest_id.saturating_add(1));

        let record = WorkoutRecord::new(id, date, data);
        elements.push(serde_json::to_value(&record)?);
        self.store_elements(&elements)?;

        if let Some(session) = record.as_strength() {
            let mut plans = self.load_plans();
            if plans.remember(session) {
                self.save_plans(&plans)?;
            }
        }

        AppLogger::log_workout_event("saved", record.id, record.workout_type().as_str());
        Ok(record)
    }

    /// Delete a stored element by id, returning whether it existed
    ///
    /// Every other element, decodable or not, is written back untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored blob is unreadable (it is left in
    /// place), or if the backend write fails
    pub fn delete_workout(&mut self, id: i64) -> AppResult<bool> {
        let mut elements = self.load_elements()?;
        let Some(position) = elements
            .iter()
            .position(|element| stored_id(element) == Some(id))
        else {
            return Ok(false);
        };

        let removed = elements.remove(position);
        self.store_elements(&elements)?;
        let workout_type = removed
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(labels::UNKNOWN);
        AppLogger::log_workout_event("deleted", id, workout_type);
        Ok(true)
    }

    /// Load plan templates; unreadable templates are logged and treated as empty
    pub fn load_plans(&self) -> WorkoutPlans {
        let raw = match self.store.get(storage_keys::WORKOUT_PLANS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return WorkoutPlans::default(),
            Err(e) => {
                AppLogger::log_storage_recovery(storage_keys::WORKOUT_PLANS, &e.to_string());
                return WorkoutPlans::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            AppLogger::log_storage_recovery(storage_keys::WORKOUT_PLANS, &e.to_string());
            WorkoutPlans::default()
        })
    }

    /// Store plan templates
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    pub fn save_plans(&mut self, plans: &WorkoutPlans) -> AppResult<()> {
        let json = serde_json::to_string(plans)?;
        self.store.set(storage_keys::WORKOUT_PLANS, &json)
    }
}

fn stored_id(element: &Value) -> Option<i64> {
    element.get("id").and_then(Value::as_i64)
}
