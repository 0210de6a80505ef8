// ABOUTME: In-memory key-value store for tests and ephemeral sessions
// ABOUTME: Values live in a map owned by the store and vanish when it is dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, KeyValueStore};
use std::collections::HashMap;
use workout_core::errors::AppResult;

/// In-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already set
    #[must_use]
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.into());
        Self { entries }
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
