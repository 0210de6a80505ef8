// ABOUTME: Environment configuration for the workout tracker data directory and subsystems
// ABOUTME: Loads storage location, logging, and stats engine settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use tracing::info;
use workout_intelligence::config::{ConfigError, StatsConfig};

/// Environment variable naming the data directory
pub const ENV_DATA_DIR: &str = "WORKOUT_DATA_DIR";

/// Data directory used when [`ENV_DATA_DIR`] is unset
pub const DEFAULT_DATA_DIR: &str = "./workout-data";

/// Top-level tracker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Directory holding one file per storage key
    pub data_dir: PathBuf,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Stats engine settings
    pub stats: StatsConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            logging: LoggingConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is blank or the stats settings
    /// fail to parse or validate
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env_var_or(ENV_DATA_DIR, DEFAULT_DATA_DIR);
        if data_dir.trim().is_empty() {
            return Err(ConfigError::MissingField(ENV_DATA_DIR));
        }

        let config = Self {
            data_dir: PathBuf::from(data_dir),
            logging: LoggingConfig::from_env(),
            stats: StatsConfig::load()?,
        };

        info!(
            data_dir = %config.data_dir.display(),
            min_comparison_months = config.stats.min_comparison_months,
            "Loaded tracker configuration"
        );
        Ok(config)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
