// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Placeholder messages, storage keys, labels, and default classification tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Default exercise keyword groups for strength classification
pub mod exercise_groups;

/// Placeholder messages shown by the renderer instead of internal failures
pub mod messages {
    /// Shown when the history is empty
    pub const NO_WORKOUTS: &str = "No workouts recorded yet.";
    /// Shown when a comparison needs a previous month
    pub const NEED_MORE_MONTHS: &str = "Need at least 2 months of data for comparison.";
    /// Shown when no strength month could be built
    pub const NO_STRENGTH_DATA: &str = "No strength training data available.";
    /// Shown when a record's payload lacks required fields
    pub const INVALID_DATA: &str = "Invalid data";
    /// Shown for an exercise without any set list
    pub const NO_SETS_RECORDED: &str = "No sets recorded";
}

/// Keys used in the key-value blob store
pub mod storage_keys {
    /// Serialized array of workout records
    pub const WORKOUTS: &str = "workouts";
    /// Serialized map of plan id to exercise template
    pub const WORKOUT_PLANS: &str = "workoutPlans";
}

/// Display labels
pub mod labels {
    /// Label used when a HIIT type or yoga style is missing
    pub const UNKNOWN: &str = "unknown";
    /// Catch-all strength group
    pub const OTHER_GROUP: &str = "Other";
    /// Placeholder for absent optional values in record details
    pub const NOT_AVAILABLE: &str = "N/A";
}

/// HIIT classification defaults
pub mod hiit {
    /// HIIT type that carries run metrics (compared case-insensitively)
    pub const RUN_TYPE: &str = "run";
}

/// Aggregation limits
pub mod limits {
    /// Distinct months required before a month-over-month comparison
    pub const MIN_COMPARISON_MONTHS: usize = 2;
    /// Scale for percentage breakdowns
    pub const PERCENT_SCALE: f64 = 100.0;
}

/// Decimal places used when rounding presentation values
pub mod precision {
    /// Counts (sessions, workouts)
    pub const COUNT: u8 = 0;
    /// Walking distance (miles)
    pub const DISTANCE: u8 = 1;
    /// Walking pace (min/mi)
    pub const PACE: u8 = 1;
    /// HIIT average intervals and work time
    pub const HIIT_AVERAGE: u8 = 1;
    /// Heart rate (BPM)
    pub const HEART_RATE: u8 = 0;
    /// HIIT run distance and pace
    pub const RUN_METRIC: u8 = 2;
    /// Yoga durations (minutes)
    pub const YOGA_DURATION: u8 = 0;
    /// Strength card averages: weight per rep, sets and reps per week and per workout
    pub const STRENGTH_AVERAGE: u8 = 1;
    /// Strength volume (lbs)
    pub const VOLUME: u8 = 0;
}
