// ABOUTME: Monthly workout statistics engine for the workout tracker
// ABOUTME: Month grouping, per-type aggregation, personal records, and history formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Intelligence
//!
//! Aggregation engine over an immutable snapshot of workout records. Every
//! function here is pure: the same snapshot always yields the same output
//! and no input is mutated.
//!
//! ## Modules
//!
//! - **calendar**: Month and ISO week keys, date parsing
//! - **distribution**: Session counts per workout type
//! - **strength**, **walking**, **hiit**, **yoga**: Per-type monthly aggregators
//! - **comparison**: Month-over-month deltas and insufficient-history reports
//! - **details**: History formatting and per-record validation
//! - **quality**: Records excluded from aggregation
//! - **engine**: Orchestrator producing the full stats payload
//! - **config**: Engine configuration with environment overrides

/// Month and ISO week keys
pub mod calendar;
/// Month-over-month comparison primitives
pub mod comparison;
/// Engine configuration
pub mod config;
/// History view formatting
pub mod details;
/// Workout type distribution
pub mod distribution;
/// Stats orchestrator
pub mod engine;
/// HIIT aggregation
pub mod hiit;
/// Data quality reporting
pub mod quality;
/// Strength aggregation and personal records
pub mod strength;
/// Walking aggregation
pub mod walking;
/// Yoga aggregation
pub mod yoga;

pub use calendar::{
    calendar_keys, parse_workout_date, CalendarKeys, DateParseError, MonthKey, WeekKey,
};
pub use comparison::{BreakdownEntry, Direction, MetricComparison, Polarity, ProgressReport};
pub use config::{ConfigError, ExerciseGroup, StatsConfig};
pub use details::{build_history, describe_record, HistoryEntry, InvalidRecord, RecordDetails};
pub use distribution::{summarize_distribution, WorkoutDistribution};
pub use engine::{compute_stats, StatsEngine, StatsPayload};
pub use hiit::{compute_hiit_stats, HiitComparison, HiitStats};
pub use quality::{DataQualityIssue, DataQualityKind};
pub use strength::{compute_strength_stats, ExerciseCard, StrengthReport, StrengthStats};
pub use walking::{compute_walking_stats, WalkingComparison, WalkingStats};
pub use yoga::{compute_yoga_stats, StyleChange, YogaComparison, YogaStats};
