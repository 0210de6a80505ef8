// ABOUTME: Stats engine configuration with environment overrides and validation
// ABOUTME: Comparison window, fallback labels, running HIIT types, and exercise keyword groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Stats Engine Configuration Module
//!
//! Defaults reproduce the tracker's fixed behavior. Values can be overridden
//! via environment variables with the `WORKOUT_STATS_` prefix.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;
use workout_core::constants::{exercise_groups, hiit, labels, limits};

/// Global configuration singleton
static STATS_CONFIG: OnceLock<StatsConfig> = OnceLock::new();

/// Environment variable overriding [`StatsConfig::min_comparison_months`]
pub const ENV_MIN_MONTHS: &str = "WORKOUT_STATS_MIN_MONTHS";
/// Environment variable overriding [`StatsConfig::running_hiit_types`] (comma-separated)
pub const ENV_RUNNING_TYPES: &str = "WORKOUT_STATS_RUNNING_TYPES";
/// Environment variable overriding [`StatsConfig::unknown_label`]
pub const ENV_UNKNOWN_LABEL: &str = "WORKOUT_STATS_UNKNOWN_LABEL";

/// Named keyword list used to classify strength exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseGroup {
    /// Display name of the group
    pub name: String,
    /// Keywords matched as case-insensitive substrings of the exercise name
    pub keywords: Vec<String>,
}

impl ExerciseGroup {
    /// Create a group from borrowed keywords
    #[must_use]
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            keywords: keywords.iter().map(|&keyword| keyword.to_owned()).collect(),
        }
    }

    /// Whether an exercise name contains one of this group's keywords
    #[must_use]
    pub fn matches(&self, exercise_name: &str) -> bool {
        let name = exercise_name.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    }
}

/// Stats engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Distinct months required before walking, HIIT and yoga comparisons
    pub min_comparison_months: usize,
    /// Label for a missing HIIT type or yoga style
    pub unknown_label: String,
    /// HIIT types that carry run metrics, matched case-insensitively
    pub running_hiit_types: Vec<String>,
    /// Strength groups in classification order
    pub exercise_groups: Vec<ExerciseGroup>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_comparison_months: limits::MIN_COMPARISON_MONTHS,
            unknown_label: labels::UNKNOWN.to_owned(),
            running_hiit_types: vec![hiit::RUN_TYPE.to_owned()],
            exercise_groups: exercise_groups::DEFAULT_GROUPS
                .iter()
                .map(|(name, keywords)| ExerciseGroup::new(name, keywords))
                .collect(),
        }
    }
}

impl StatsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        STATS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load stats config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_comparison_months < limits::MIN_COMPARISON_MONTHS {
            return Err(ConfigError::InvalidRange(
                "min_comparison_months must be >= 2",
            ));
        }

        if self.unknown_label.trim().is_empty() {
            return Err(ConfigError::MissingField("unknown_label"));
        }

        if self
            .running_hiit_types
            .iter()
            .any(|hiit_type| hiit_type.trim().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(
                "running_hiit_types must not contain blank entries",
            ));
        }

        for group in &self.exercise_groups {
            if group.name.trim().is_empty() {
                return Err(ConfigError::MissingField("exercise_groups.name"));
            }
            if group.keywords.is_empty() || group.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::ValueOutOfRange(
                    "exercise_groups keywords must be non-empty",
                ));
            }
        }

        Ok(())
    }

    /// Whether a HIIT type is a running category
    #[must_use]
    pub fn is_running_type(&self, hiit_type: &str) -> bool {
        let hiit_type = hiit_type.trim();
        self.running_hiit_types
            .iter()
            .any(|running| running.eq_ignore_ascii_case(hiit_type))
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = read_env(env_var_name)? {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_MIN_MONTHS, &mut self.min_comparison_months)?;
        Self::apply_env_var(ENV_UNKNOWN_LABEL, &mut self.unknown_label)?;

        if let Some(val) = read_env(ENV_RUNNING_TYPES)? {
            self.running_hiit_types = val
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_owned)
                .collect();
        }

        Ok(self)
    }
}

/// Read an override; unset is `None`, a non-unicode value is an error
fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
