// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, workout record models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Placeholder messages, storage keys, and default keyword tables
//! - **models**: Workout records, type-specific payloads, and plan templates

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutRecord`, payloads, plan templates)
pub mod models;
