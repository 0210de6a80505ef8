// ABOUTME: Month-over-month comparison primitives shared by every aggregator
// ABOUTME: Signed deltas with improvement direction, insufficient-history reports, and breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use indexmap::IndexMap;
use serde::Serialize;
use workout_core::constants::{limits::PERCENT_SCALE, messages};

/// Whether a delta reads as progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Delta is zero or an improvement
    Positive,
    /// Delta is a regression
    Negative,
}

/// Which way a metric improves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    /// Larger values are better (distance, volume, sessions)
    HigherIsBetter,
    /// Smaller values are better (pace, heart rate)
    LowerIsBetter,
}

/// One metric compared between the latest month and the month before it
///
/// `delta` is already oriented so that a positive value is an improvement:
/// `current - previous` for [`Polarity::HigherIsBetter`] and
/// `previous - current` for [`Polarity::LowerIsBetter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    /// Value for the latest month
    pub current: f64,
    /// Value for the preceding month
    pub previous: f64,
    /// Oriented, unrounded delta
    pub delta: f64,
    /// `|delta|` rounded to `precision` decimals
    pub magnitude: f64,
    /// Sign of `delta` (`>= 0` is positive)
    pub direction: Direction,
    /// Orientation used for `delta`
    pub polarity: Polarity,
    /// Decimal places for presentation
    pub precision: u8,
}

impl MetricComparison {
    /// Compare a metric where larger is better
    #[must_use]
    pub fn higher_is_better(current: f64, previous: f64, precision: u8) -> Self {
        Self::build(current, previous, current - previous, Polarity::HigherIsBetter, precision)
    }

    /// Compare a metric where smaller is better; the delta is inverted
    #[must_use]
    pub fn lower_is_better(current: f64, previous: f64, precision: u8) -> Self {
        Self::build(current, previous, previous - current, Polarity::LowerIsBetter, precision)
    }

    fn build(current: f64, previous: f64, delta: f64, polarity: Polarity, precision: u8) -> Self {
        Self {
            current,
            previous,
            delta,
            magnitude: round_to(delta.abs(), precision),
            direction: if delta >= 0.0 {
                Direction::Positive
            } else {
                Direction::Negative
            },
            polarity,
            precision,
        }
    }

    /// Whether the delta is zero or an improvement
    #[must_use]
    pub const fn is_improvement(&self) -> bool {
        matches!(self.direction, Direction::Positive)
    }
}

/// Outcome of a month-over-month aggregation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "report", rename_all = "camelCase")]
pub enum ProgressReport<T> {
    /// No dated record of this type exists
    NoData,
    /// Fewer distinct months than the comparison needs
    #[serde(rename_all = "camelCase")]
    NeedMoreData {
        /// Distinct months found
        months_available: usize,
    },
    /// Comparison computed
    Ready(T),
}

impl<T> ProgressReport<T> {
    /// Computed report, if any
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(report) => Some(report),
            Self::NoData | Self::NeedMoreData { .. } => None,
        }
    }

    /// Whether a report was computed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Message the renderer shows in place of a report
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::NoData => Some(messages::NO_STRENGTH_DATA),
            Self::NeedMoreData { .. } => Some(messages::NEED_MORE_MONTHS),
            Self::Ready(_) => None,
        }
    }
}

/// Share of a month's sessions for one label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    /// HIIT type or yoga style
    pub label: String,
    /// Sessions with this label
    pub count: u32,
    /// Rounded whole percentage of the month's sessions
    pub percentage: u32,
}

/// Round to a number of decimal places
#[must_use]
pub fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(precision));
    (value * factor).round() / factor
}

/// Mean of a total over a count; zero when the count is zero
#[must_use]
pub fn mean(total: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / f64::from(count)
    }
}

/// Per-label percentage breakdown in first-seen order
///
/// Each entry is rounded on its own, so the percentages need not sum to 100.
#[must_use]
pub fn percentage_breakdown(counts: &IndexMap<String, u32>, total: u32) -> Vec<BreakdownEntry> {
    counts
        .iter()
        .map(|(label, &count)| BreakdownEntry {
            label: label.clone(),
            count,
            percentage: (mean(f64::from(count), total) * PERCENT_SCALE).round() as u32,
        })
        .collect()
}
