// ABOUTME: Lenient field decoders for workout payloads stored as loosely typed JSON
// ABOUTME: Accepts numbers, numeric strings, empty strings, and "N/A" markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Stored payloads come straight from form inputs, so a weight may be `135`,
//! `"135"`, `""` or `"N/A"`. These decoders map every absent or unusable
//! value to `None` so a single odd field never makes a whole record
//! undecodable.

use crate::constants::labels::NOT_AVAILABLE;
use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a decimal from user-entered text
///
/// Returns `None` for blank input, the `N/A` marker, non-numeric text, and
/// non-finite values.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a non-negative whole number from user-entered text
///
/// Fractional input is truncated toward zero (`"5.7"` → 5).
#[must_use]
pub fn parse_count(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    parse_decimal(trimmed).and_then(count_from_decimal)
}

fn count_from_decimal(value: f64) -> Option<u32> {
    // Safe: range checked before the cast
    if value >= 0.0 && value <= f64::from(u32::MAX) {
        Some(value.trunc() as u32)
    } else {
        None
    }
}

fn decimal_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

fn count_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .or_else(|| number.as_f64().and_then(count_from_decimal)),
        Value::String(text) => parse_count(text),
        _ => None,
    }
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Decode an optional decimal field
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Decode an optional whole-number field
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

/// Decode an optional free-text field; blank strings become `None`
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value))
}

/// Decode an optional list; anything other than an array becomes `None`
///
/// # Errors
///
/// Returns an error when the value is an array whose elements do not decode.
pub fn optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}
