// ABOUTME: Logging configuration and structured logging setup for the workout tracker
// ABOUTME: Configures log levels, formatters, and application event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration

use anyhow::Result;
use std::env;
use std::io;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Default service name in structured logs
pub const SERVICE_NAME: &str = "workout-tracker";

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "development";
const PRODUCTION: &str = "production";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Independent output toggles
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `workout_intelligence=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread names or ids
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name reported at startup
    pub service_name: String,
    /// Service version reported at startup
    pub service_version: String,
    /// Deployment environment name
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human readable output
    #[default]
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a format name, defaulting to [`LogFormat::Pretty`]
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::default(),
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: DEFAULT_ENVIRONMENT.to_owned(),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some()
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, the `LOG_INCLUDE_*`
    /// flags, `SERVICE_NAME`, and `SERVICE_VERSION`. The production
    /// environment turns every detail flag on.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let verbose = environment == PRODUCTION;

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: verbose || env_flag("LOG_INCLUDE_LOCATION"),
            include_thread: verbose || env_flag("LOG_INCLUDE_THREAD"),
            include_spans: verbose || env_flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Filter built from the configured level, falling back to `info`
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr. Exactly one of the optional format layers is
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let json_layer = (self.format == LogFormat::Json).then(|| {
            fmt::layer()
                .json()
                .with_current_span(self.include_spans)
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
        });
        let pretty_layer = (self.format == LogFormat::Pretty).then(|| {
            fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_names(self.include_thread)
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
        });
        let compact_layer = (self.format == LogFormat::Compact).then(|| {
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
        });

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(json_layer)
            .with(pretty_layer)
            .with(compact_layer)
            .try_init()?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a stored workout change
    pub fn log_workout_event(event: &str, workout_id: i64, workout_type: &str) {
        info!(
            workout.event = %event,
            workout.id = workout_id,
            workout.kind = %workout_type,
            "Workout event"
        );
    }

    /// Log a backup export or import
    pub fn log_backup_event(event: &str, workouts: usize, plans: usize) {
        info!(
            backup.event = %event,
            backup.workouts = workouts,
            backup.plans = plans,
            "Backup event"
        );
    }

    /// Log a storage problem that was recovered from
    pub fn log_storage_recovery(key: &str, details: &str) {
        warn!(
            storage.key = %key,
            storage.details = %details,
            "Recovered from unreadable stored data"
        );
    }

    /// Log a stats computation
    pub fn log_stats_computed(records: usize, excluded: usize, duration_us: u64) {
        info!(
            stats.records = records,
            stats.excluded = excluded,
            stats.duration_us = duration_us,
            "Stats computed"
        );
    }
}
