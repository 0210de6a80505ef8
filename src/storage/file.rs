// ABOUTME: File-backed key-value store keeping one JSON file per key
// ABOUTME: Writes go to a temporary file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, KeyValueStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use workout_core::errors::{AppError, AppResult};

/// File-per-key store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store, creating the data directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}",
                root.display()
            ))
            .with_source(e)
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {}", path.display()))
                .with_source(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(|e| {
            AppError::storage(format!("Failed to write {}", temp_path.display())).with_source(e)
        })?;
        fs::rename(&temp_path, &path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}", path.display())).with_source(e)
        })?;

        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove {}", path.display()))
                .with_source(e)),
        }
    }
}
