// ABOUTME: Data quality reporting for records excluded from monthly aggregation
// ABOUTME: Partitions a snapshot into dated records of one type and reported exclusions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar::{calendar_keys, parse_workout_date, CalendarKeys};
use serde::Serialize;
use tracing::warn;
use workout_core::models::{WorkoutRecord, WorkoutType};

/// Why a record was left out of aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataQualityKind {
    /// The stored date matches no accepted layout
    UnparsableDate {
        /// Date text as stored
        value: String,
    },
}

/// A record excluded from aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityIssue {
    /// Id of the excluded record
    pub record_id: i64,
    /// Type of the excluded record
    pub workout_type: WorkoutType,
    /// Reason for the exclusion
    #[serde(flatten)]
    pub kind: DataQualityKind,
}

/// Records of one type with their calendar keys
#[derive(Debug, Default)]
pub struct DatedRecords<'a> {
    /// Records in snapshot order with the keys of their date
    pub entries: Vec<(CalendarKeys, &'a WorkoutRecord)>,
    /// Records of the type whose date could not be used
    pub issues: Vec<DataQualityIssue>,
}

/// Select records of one type and key them by date
///
/// Records with an unparsable date are excluded and reported, never dropped
/// silently.
#[must_use]
pub fn partition_dated(records: &[WorkoutRecord], workout_type: WorkoutType) -> DatedRecords<'_> {
    let mut dated = DatedRecords::default();

    for record in records.iter().filter(|r| r.workout_type() == workout_type) {
        match parse_workout_date(&record.date) {
            Ok(date) => dated.entries.push((calendar_keys(date), record)),
            Err(e) => {
                warn!(record_id = record.id, %workout_type, "Excluding record from stats: {e}");
                dated.issues.push(DataQualityIssue {
                    record_id: record.id,
                    workout_type,
                    kind: DataQualityKind::UnparsableDate { value: e.value },
                });
            }
        }
    }

    dated
}
