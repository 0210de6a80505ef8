// ABOUTME: JSON backup export and import of workout history and plan templates
// ABOUTME: Import validates the bundle shape before replacing any stored key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::snapshot::decode_snapshot;
use super::repository::WorkoutRepository;
use super::KeyValueStore;
use crate::logging::AppLogger;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use workout_core::constants::storage_keys;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{WorkoutPlans, WorkoutRecord};

/// Exported backup file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBundle {
    /// Workout history
    pub workouts: Vec<WorkoutRecord>,
    /// Plan templates
    pub workout_plans: WorkoutPlans,
    /// Export time (RFC 3339, UTC)
    pub export_date: String,
}

/// What an import replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records imported, when the bundle carried workouts
    pub workouts: Option<usize>,
    /// Plans imported, when the bundle carried templates
    pub plans: Option<usize>,
}

/// Serialize the current history and templates as a backup bundle
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn export_backup<S: KeyValueStore>(repository: &WorkoutRepository<S>) -> AppResult<String> {
    let bundle = BackupBundle {
        workouts: repository.load_all(),
        workout_plans: repository.load_plans(),
        export_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let json = serde_json::to_string_pretty(&bundle)?;
    AppLogger::log_backup_event("export", bundle.workouts.len(), bundle.workout_plans.len());
    Ok(json)
}

/// Restore a backup bundle
///
/// `workouts` must be an array and `workoutPlans` an object when present;
/// each present key replaces the stored one, absent keys are left alone.
/// Nothing is written unless the whole bundle validates.
///
/// # Errors
///
/// Returns a serialization error for malformed JSON, an invalid-format
/// error for a bundle of the wrong shape, or an error if a backend write
/// fails
pub fn import_backup<S: KeyValueStore>(
    repository: &mut WorkoutRepository<S>,
    json: &str,
) -> AppResult<ImportSummary> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(mut bundle) = value else {
        return Err(AppError::invalid_format("Backup must be a JSON object"));
    };

    let workouts = match bundle.remove(storage_keys::WORKOUTS) {
        None | Some(Value::Null) => None,
        Some(value @ Value::Array(_)) => Some(decode_snapshot(value)?),
        Some(_) => {
            return Err(AppError::invalid_format(
                "Backup workouts must be a JSON array",
            ))
        }
    };

    let plans = match bundle.remove(storage_keys::WORKOUT_PLANS) {
        None | Some(Value::Null) => None,
        Some(value @ Value::Object(_)) => Some(
            serde_json::from_value::<WorkoutPlans>(value).map_err(|e| {
                AppError::invalid_format(format!("Backup workoutPlans are invalid: {e}"))
                    .with_source(e)
            })?,
        ),
        Some(_) => {
            return Err(AppError::invalid_format(
                "Backup workoutPlans must be a JSON object",
            ))
        }
    };

    let mut summary = ImportSummary::default();
    if let Some(snapshot) = workouts {
        repository.replace_all(&snapshot.records)?;
        summary.workouts = Some(snapshot.records.len());
    }
    if let Some(plans) = plans {
        repository.save_plans(&plans)?;
        summary.plans = Some(plans.len());
    }

    AppLogger::log_backup_event(
        "import",
        summary.workouts.unwrap_or(0),
        summary.plans.unwrap_or(0),
    );
    Ok(summary)
}
