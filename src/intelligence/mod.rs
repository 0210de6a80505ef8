// ABOUTME: Intelligence module re-exports from the workout-intelligence crate
// ABOUTME: Keeps crate-root import paths stable while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Monthly statistics over logged workouts. This module re-exports the
//! `workout-intelligence` crate.

// Re-export all public items from workout-intelligence
pub use workout_intelligence::*;

// Submodules stay reachable by path, e.g. `intelligence::strength::classify_exercise`
pub use workout_intelligence::{
    calendar, comparison, details, distribution, engine, hiit, quality, strength, walking, yoga,
};
