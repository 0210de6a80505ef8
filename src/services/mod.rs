// ABOUTME: Domain service layer joining stored workouts to the stats engine and history view
// ABOUTME: Services read a fresh snapshot from a repository on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services load an immutable snapshot from a [`WorkoutRepository`] and hand
//! it to the pure functions of the stats engine. No snapshot is cached
//! between calls.
//!
//! [`WorkoutRepository`]: crate::storage::WorkoutRepository

/// History view built from stored workouts
pub mod history;

/// Stats view built from stored workouts
pub mod stats;

pub use history::HistoryService;
pub use stats::StatsService;
