// ABOUTME: Integration tests for monthly yoga aggregation and style tracking
// ABOUTME: Covers favorite style ties, style changes, and duration comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, yoga};
use workout_tracker::intelligence::{compute_yoga_stats, ProgressReport, StatsConfig, StyleChange};
use workout_tracker::models::WorkoutData;

#[test]
fn test_favorite_style_tie_goes_to_first_seen() {
    init_test_logging();
    let records = vec![
        yoga(1, "2024-01-03", "Vinyasa", 30.0),
        yoga(2, "2024-01-05", "Hatha", 45.0),
        yoga(3, "2024-01-07", "Hatha", 45.0),
        yoga(4, "2024-01-09", "Vinyasa", 30.0),
    ];

    let stats = compute_yoga_stats(&records, &StatsConfig::default());
    let month = &stats.months[0];
    assert_eq!(month.favorite_style, "Vinyasa");
    assert_eq!(month.style_breakdown[0].label, "Vinyasa");
    assert_eq!(month.style_breakdown[0].percentage, 50);
    assert_close(month.average_duration, 37.5);
}

#[test]
fn test_style_change_reports_previous_favorite() {
    let records = vec![
        yoga(1, "2024-01-03", "Hatha", 40.0),
        yoga(2, "2024-02-03", "Yin", 60.0),
        yoga(3, "2024-02-10", "Yin", 60.0),
        yoga(4, "2024-02-17", "Hatha", 30.0),
    ];

    let stats = compute_yoga_stats(&records, &StatsConfig::default());
    let comparison = stats.progress.ready().expect("two months should compare");

    assert_eq!(comparison.favorite_style, "Yin");
    assert_eq!(
        comparison.favorite_style_change,
        StyleChange::Changed {
            previous: "Hatha".to_owned()
        }
    );
    assert_close(comparison.session_count.delta, 2.0);
    assert_close(comparison.total_duration.delta, 110.0);
    assert_close(comparison.average_duration.current, 50.0);
    assert_close(comparison.average_duration.delta, 10.0);
    assert_eq!(comparison.style_breakdown.len(), 2);
    assert_eq!(comparison.style_breakdown[0].percentage, 67);
}

#[test]
fn test_unchanged_favorite_style() {
    let records = vec![
        yoga(1, "2024-03-03", "Vinyasa", 40.0),
        yoga(2, "2024-04-03", "Vinyasa", 20.0),
    ];

    let stats = compute_yoga_stats(&records, &StatsConfig::default());
    let comparison = stats.progress.ready().unwrap();
    assert_eq!(comparison.favorite_style_change, StyleChange::Unchanged);
    assert!(!comparison.total_duration.is_improvement());
}

#[test]
fn test_single_month_needs_more_data() {
    let records = vec![yoga(1, "2024-03-03", "Yin", 40.0)];

    let stats = compute_yoga_stats(&records, &StatsConfig::default());
    assert!(matches!(
        stats.progress,
        ProgressReport::NeedMoreData {
            months_available: 1
        }
    ));
}

#[test]
fn test_missing_duration_counts_as_zero() {
    let mut record = yoga(1, "2024-03-03", "Yin", 40.0);
    if let WorkoutData::Yoga(payload) = &mut record.data {
        payload.duration = None;
    }
    let records = vec![record, yoga(2, "2024-03-05", "Yin", 40.0)];

    let stats = compute_yoga_stats(&records, &StatsConfig::default());
    assert_close(stats.months[0].total_duration, 40.0);
    assert_close(stats.months[0].average_duration, 20.0);
}
