// ABOUTME: Calendar keys for grouping workouts by month and ISO week
// ABOUTME: Parses stored workout dates and derives ordered month and week keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Accepted local date-time layouts after the plain date
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Stored workout date that matches none of the accepted layouts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized workout date: {value:?}")]
pub struct DateParseError {
    /// Date text as stored
    pub value: String,
}

/// Calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a key; `month` is 1-based
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if matches!(month, 1..=12) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month containing a date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// English month name
    #[must_use]
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// ISO-8601 week, keyed by ISO week-year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    year: i32,
    week: u32,
}

impl WeekKey {
    /// ISO week containing a date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// ISO week-year (may differ from the calendar year near January 1)
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// ISO week number, 1-53
    #[must_use]
    pub const fn week(self) -> u32 {
        self.week
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Grouping keys derived from one workout date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarKeys {
    /// Calendar month
    pub month: MonthKey,
    /// ISO week
    pub week: WeekKey,
    /// English month name
    pub month_name: &'static str,
    /// Calendar year
    pub year: i32,
}

/// Derive month and week keys for a date
#[must_use]
pub fn calendar_keys(date: NaiveDate) -> CalendarKeys {
    let month = MonthKey::from_date(date);
    CalendarKeys {
        month,
        week: WeekKey::from_date(date),
        month_name: month.month_name(),
        year: date.year(),
    }
}

/// Parse a stored workout date
///
/// Accepts `YYYY-MM-DD`, local `YYYY-MM-DDTHH:MM[:SS]`, and RFC 3339
/// timestamps. Timestamps keep the date as written, without converting
/// between zones.
///
/// # Errors
///
/// Returns [`DateParseError`] when the text matches none of these layouts.
pub fn parse_workout_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|date_time| date_time.date())
        .ok_or_else(|| DateParseError {
            value: value.to_owned(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_month_key_orders_numerically() {
        let september = MonthKey::from_date(date(2024, 9, 30));
        let october = MonthKey::from_date(date(2024, 10, 1));
        assert!(september < october);
        assert_eq!(september.to_string(), "2024-09");
        assert_eq!(october.month_name(), "October");
    }

    #[test]
    fn test_week_key_uses_iso_week_year() {
        // 2024-12-30 is a Monday in ISO week 1 of 2025
        let keys = calendar_keys(date(2024, 12, 30));
        assert_eq!(keys.week.to_string(), "2025-W01");
        assert_eq!(keys.month.to_string(), "2024-12");
        assert_eq!(keys.year, 2024);
    }

    #[test]
    fn test_parse_accepts_supported_layouts() {
        assert_eq!(parse_workout_date("2024-01-15"), Ok(date(2024, 1, 15)));
        assert_eq!(
            parse_workout_date("2024-01-15T07:30"),
            Ok(date(2024, 1, 15))
        );
        assert_eq!(
            parse_workout_date("2024-01-15T23:30:00-05:00"),
            Ok(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_workout_date("next tuesday").unwrap_err();
        assert_eq!(err.value, "next tuesday");
        assert!(parse_workout_date("").is_err());
        assert!(parse_workout_date("2024-13-01").is_err());
    }

    #[test]
    fn test_month_key_rejects_invalid_month() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
        assert_eq!(MonthKey::new(2024, 2).map(MonthKey::month), Some(2));
    }
}
