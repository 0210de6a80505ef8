// ABOUTME: Core data models for logged workouts and strength plan templates
// ABOUTME: Re-exports record, payload, plan, and lenient field decoding types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Lenient decoders for loosely typed stored fields
pub mod fields;
/// Type-specific workout payloads
pub mod payload;
/// Strength plan identifiers and templates
pub mod plan;
/// Workout record and type enumeration
pub mod workout;

pub use payload::{Exercise, HiitPayload, SetEntry, StrengthPayload, WalkingPayload, YogaPayload};
pub use plan::{PlanExercise, PlanId, WorkoutPlans};
pub use workout::{WorkoutData, WorkoutRecord, WorkoutType};
