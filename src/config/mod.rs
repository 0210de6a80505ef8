// ABOUTME: Configuration module for the workout tracker
// ABOUTME: Re-exports environment loading and the stats engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven tracker configuration
pub mod environment;

pub use environment::TrackerConfig;
pub use workout_intelligence::config::{ConfigError, ExerciseGroup, StatsConfig};
