// ABOUTME: Key-value blob storage for workout history and plan templates
// ABOUTME: In-memory and file backends behind a repository with snapshot and backup support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage Layer
//!
//! The tracker persists two JSON blobs: the workout history array and the
//! plan template map. Backends only move strings in and out; decoding,
//! recovery from corrupt blobs, and backup bundles live above them.

/// JSON backup export and import
pub mod backup;
/// File-per-key backend
pub mod file;
/// In-memory backend
pub mod memory;
/// Workout repository over a key-value backend
pub mod repository;
/// Snapshot decoding of the stored workout array
pub mod snapshot;

pub use backup::{export_backup, import_backup, BackupBundle, ImportSummary};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::WorkoutRepository;
pub use snapshot::{decode_snapshot, Snapshot};

use workout_core::errors::{AppError, AppResult};

/// Key-value blob store
pub trait KeyValueStore {
    /// Read the value stored under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value under a key, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Reject keys that are empty or could escape a storage namespace
///
/// # Errors
///
/// Returns an invalid-input error for blank keys or keys containing path
/// separators or `..`
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.trim().is_empty() {
        return Err(AppError::invalid_input("Storage key must not be empty"));
    }
    if key.contains(['/', '\\']) || key.contains("..") {
        return Err(AppError::invalid_input(format!(
            "Storage key contains a path separator: {key}"
        )));
    }
    Ok(())
}
