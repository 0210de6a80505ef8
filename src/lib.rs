// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Storage, services, logging, and configuration around the workout stats engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! A personal workout log for strength, walking, HIIT and yoga sessions with
//! monthly progress statistics.
//!
//! ## Architecture
//!
//! - **`workout-core`**: Records, payloads, errors, and constants
//! - **`workout-intelligence`**: The monthly aggregation engine
//! - **Storage**: Key-value blob store, workout repository, and backups
//! - **Services**: Stats and history views over a repository
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_tracker::models::{WalkingPayload, WorkoutData};
//! use workout_tracker::services::StatsService;
//! use workout_tracker::storage::{MemoryStore, WorkoutRepository};
//! use workout_tracker::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let mut repository = WorkoutRepository::new(MemoryStore::new());
//!     repository.add_workout(
//!         "2024-01-15",
//!         WorkoutData::Walking(WalkingPayload::new(3.0, 45.0)),
//!     )?;
//!
//!     let stats = StatsService::default().stats(&repository);
//!     println!("Walks logged: {}", stats.distribution.walking);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Workout statistics engine (re-exported from `workout-intelligence`)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Stats and history services
pub mod services;

/// Key-value storage, repository, and backups
pub mod storage;

/// Unified error handling (re-exported from `workout-core`)
pub use workout_core::errors;

/// Application constants (re-exported from `workout-core`)
pub use workout_core::constants;

/// Workout data models (re-exported from `workout-core`)
pub use workout_core::models;
