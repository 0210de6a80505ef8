// ABOUTME: Integration tests for monthly walking aggregation and comparisons
// ABOUTME: Covers pace derivation, inverted pace deltas, and month ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, walk};
use workout_tracker::intelligence::{
    compute_walking_stats, Direction, MonthKey, Polarity, ProgressReport, StatsConfig,
};

#[test]
fn test_pace_improvement_is_positive() {
    init_test_logging();
    let records = vec![
        walk(1, "2024-01-10", 5.0, 50.0),
        walk(2, "2024-02-10", 6.0, 54.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    assert_eq!(stats.months.len(), 2);
    assert_close(stats.months[0].average_pace, 10.0);
    assert_close(stats.months[1].average_pace, 9.0);

    let comparison = stats.progress.ready().expect("two months should compare");
    assert_eq!(comparison.current_month, MonthKey::new(2024, 2).unwrap());
    assert_eq!(comparison.previous_month, MonthKey::new(2024, 1).unwrap());

    assert_eq!(comparison.average_pace.polarity, Polarity::LowerIsBetter);
    assert_close(comparison.average_pace.delta, 1.0);
    assert_close(comparison.average_pace.magnitude, 1.0);
    assert_eq!(comparison.average_pace.direction, Direction::Positive);
    assert!(comparison.average_pace.is_improvement());

    assert_close(comparison.total_distance.delta, 1.0);
    assert_eq!(comparison.total_distance.direction, Direction::Positive);
    assert_close(comparison.workout_count.delta, 0.0);
    assert!(comparison.workout_count.is_improvement());
}

#[test]
fn test_slower_pace_is_negative() {
    let records = vec![
        walk(1, "2024-03-02", 3.0, 36.0),
        walk(2, "2024-04-02", 3.0, 45.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    let comparison = stats.progress.ready().unwrap();

    assert_close(comparison.average_pace.delta, -3.0);
    assert_eq!(comparison.average_pace.direction, Direction::Negative);
    assert!(!comparison.average_pace.is_improvement());
}

#[test]
fn test_single_month_needs_more_data() {
    let records = vec![
        walk(1, "2024-05-01", 2.0, 30.0),
        walk(2, "2024-05-20", 4.0, 60.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    assert_eq!(
        stats.progress,
        ProgressReport::NeedMoreData {
            months_available: 1
        }
    );
    assert_eq!(stats.months[0].workout_count, 2);
    assert_close(stats.months[0].total_distance, 6.0);
    assert_close(stats.months[0].average_distance, 3.0);
    assert_eq!(
        stats.progress.placeholder(),
        Some("Need at least 2 months of data for comparison.")
    );
}

#[test]
fn test_zero_distance_walks_have_zero_pace() {
    let records = vec![
        walk(1, "2024-06-01", 0.0, 20.0),
        walk(2, "2024-06-03", 0.0, 25.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    let month = &stats.months[0];
    assert_eq!(month.pace_samples, 0);
    assert_close(month.average_pace, 0.0);
    assert!(month.average_pace.is_finite());
    assert_close(month.total_duration, 45.0);
}

#[test]
fn test_average_pace_is_mean_of_session_paces() {
    // Paces 10 and 15 average to 12.5, not total duration over total distance.
    let records = vec![
        walk(1, "2024-07-01", 4.0, 40.0),
        walk(2, "2024-07-02", 1.0, 15.0),
        walk(3, "2024-07-03", 0.0, 10.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    let month = &stats.months[0];
    assert_eq!(month.pace_samples, 2);
    assert_close(month.average_pace, 12.5);
    assert_eq!(month.workout_count, 3);
}

#[test]
fn test_months_compare_chronologically_across_years() {
    let records = vec![
        walk(1, "2024-01-15", 3.0, 45.0),
        walk(2, "2023-10-15", 2.0, 30.0),
        walk(3, "2023-09-15", 1.0, 15.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    let order: Vec<String> = stats.months.iter().map(|m| m.month.to_string()).collect();
    assert_eq!(order, vec!["2023-09", "2023-10", "2024-01"]);
    assert_eq!(stats.months[1].month_name, "October");

    let comparison = stats.progress.ready().unwrap();
    assert_eq!(comparison.current_month.to_string(), "2024-01");
    assert_eq!(comparison.previous_month.to_string(), "2023-10");
}

#[test]
fn test_unparsable_dates_are_reported_not_dropped_silently() {
    let records = vec![
        walk(1, "2024-01-15", 3.0, 45.0),
        walk(2, "someday", 9.0, 90.0),
    ];

    let stats = compute_walking_stats(&records, &StatsConfig::default());
    assert_eq!(stats.months.len(), 1);
    assert_close(stats.months[0].total_distance, 3.0);
    assert_eq!(stats.data_quality.len(), 1);
    assert_eq!(stats.data_quality[0].record_id, 2);
}

#[test]
fn test_configured_minimum_months() {
    let config = StatsConfig {
        min_comparison_months: 3,
        ..StatsConfig::default()
    };
    let records = vec![
        walk(1, "2024-01-15", 3.0, 45.0),
        walk(2, "2024-02-15", 3.0, 45.0),
    ];

    let stats = compute_walking_stats(&records, &config);
    assert_eq!(
        stats.progress,
        ProgressReport::NeedMoreData {
            months_available: 2
        }
    );
}

#[test]
fn test_aggregation_is_idempotent() {
    let records = vec![
        walk(1, "2024-01-10", 5.0, 50.0),
        walk(2, "2024-02-10", 6.0, 54.0),
        walk(3, "2024-02-11", 2.5, 30.0),
    ];
    let config = StatsConfig::default();

    assert_eq!(
        compute_walking_stats(&records, &config),
        compute_walking_stats(&records, &config)
    );
}
