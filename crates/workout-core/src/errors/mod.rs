// ABOUTME: Unified error handling with standard error codes for the workout tracker
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Systemic failures (a snapshot that is not a sequence, a backup that is not
//! JSON, an unreadable data directory) surface as a typed [`AppError`].
//! Per-record problems never use this type: they are isolated by the
//! aggregation engine and reported alongside its results.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Data had the wrong shape (e.g. a snapshot that is not an array)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Internal Errors (9000-9999)
    /// Key-value store read or write failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Numeric code for log correlation
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Data has the wrong shape
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::invalid_format("workouts must be an array");
        assert_eq!(
            error.to_string(),
            "The data format is invalid: workouts must be an array"
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::StorageError).unwrap();
        assert_eq!(json, "\"STORAGE_ERROR\"");
        assert_eq!(ErrorCode::StorageError.as_u16(), 9002);
    }

    #[test]
    fn test_json_error_conversion_keeps_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = AppError::from(parse_error);

        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(StdError::source(&error).is_some());
    }
}
