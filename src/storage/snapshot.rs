// ABOUTME: Decoding of the stored workout array into an immutable record snapshot
// ABOUTME: A non-array blob is a typed failure; undecodable elements are skipped and counted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use tracing::warn;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutRecord;

/// Records decoded from one read of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Decoded records in stored order
    pub records: Vec<WorkoutRecord>,
    /// Elements that did not decode as a workout record
    pub skipped: usize,
}

/// Decode the stored workout array
///
/// # Errors
///
/// Returns an invalid-format error when the value is not an array
pub fn decode_snapshot(value: Value) -> AppResult<Snapshot> {
    let Value::Array(elements) = value else {
        return Err(AppError::invalid_format(
            "Stored workouts must be a JSON array",
        ));
    };

    let mut snapshot = Snapshot::default();
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<WorkoutRecord>(element) {
            Ok(record) => snapshot.records.push(record),
            Err(e) => {
                warn!(index, "Skipping undecodable workout record: {e}");
                snapshot.skipped += 1;
            }
        }
    }

    Ok(snapshot)
}
