// ABOUTME: Integration tests for monthly HIIT aggregation and run sub-metrics
// ABOUTME: Covers type breakdowns, heart-rate sampling, and running comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, hiit, hiit_with, init_test_logging};
use workout_tracker::intelligence::{
    compute_hiit_stats, Direction, Polarity, ProgressReport, StatsConfig,
};
use workout_tracker::models::HiitPayload;

fn run(distance: f64, avg_pace: Option<f64>) -> HiitPayload {
    HiitPayload::new("Run", 6, 2.0, 1.0).with_run(distance, avg_pace)
}

#[test]
fn test_single_run_month_needs_more_data() {
    init_test_logging();
    let records = vec![hiit_with(1, "2024-03-05", run(3.0, Some(8.0)))];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    assert_eq!(
        stats.progress,
        ProgressReport::NeedMoreData {
            months_available: 1
        }
    );

    let month = &stats.months[0];
    assert_eq!(month.workout_count, 1);
    let run_summary = month.run.as_ref().expect("run sessions tracked");
    assert_close(run_summary.total_distance, 3.0);
    assert_close(run_summary.average_pace, 8.0);
}

#[test]
fn test_type_breakdown_rounds_each_share() {
    let records = vec![
        hiit(1, "2024-01-02", "Tabata", 8),
        hiit(2, "2024-01-04", "Tabata", 8),
        hiit(3, "2024-01-06", "EMOM", 10),
    ];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    let breakdown = &stats.months[0].type_breakdown;
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].label, "Tabata");
    assert_eq!(breakdown[0].count, 2);
    assert_eq!(breakdown[0].percentage, 67);
    assert_eq!(breakdown[1].label, "EMOM");
    assert_eq!(breakdown[1].percentage, 33);
    assert_close(stats.months[0].average_intervals, 26.0 / 3.0);
}

#[test]
fn test_missing_type_uses_unknown_label() {
    let mut payload = HiitPayload::new("x", 5, 1.0, 1.0);
    payload.hiit_type = None;
    let records = vec![hiit_with(1, "2024-01-02", payload)];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    assert_eq!(stats.months[0].type_breakdown[0].label, "unknown");
    assert_eq!(stats.months[0].type_breakdown[0].percentage, 100);
}

#[test]
fn test_run_comparison_between_months() {
    let records = vec![
        hiit_with(1, "2024-01-10", run(2.0, Some(9.0))),
        hiit_with(2, "2024-01-20", run(4.0, Some(8.0))),
        hiit_with(3, "2024-02-10", run(3.5, Some(8.0))),
    ];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    let comparison = stats.progress.ready().expect("two months should compare");

    let distance = comparison
        .average_run_distance
        .as_ref()
        .expect("both months ran");
    assert_close(distance.previous, 3.0);
    assert_close(distance.current, 3.5);
    assert_close(distance.delta, 0.5);
    assert_eq!(distance.direction, Direction::Positive);

    let pace = comparison
        .average_run_pace
        .as_ref()
        .expect("both months have pace");
    assert_eq!(pace.polarity, Polarity::LowerIsBetter);
    assert_close(pace.previous, 8.5);
    assert_close(pace.delta, 0.5);
    assert!(pace.is_improvement());
}

#[test]
fn test_run_category_ignores_case_and_needs_distance() {
    let records = vec![
        hiit_with(
            1,
            "2024-01-10",
            HiitPayload::new("RUN", 4, 1.0, 1.0).with_run(2.0, None),
        ),
        hiit_with(
            2,
            "2024-01-11",
            HiitPayload::new("run", 4, 1.0, 1.0).with_run(0.0, Some(7.0)),
        ),
        hiit_with(
            3,
            "2024-01-12",
            HiitPayload::new("Tabata", 4, 1.0, 1.0).with_run(5.0, Some(7.0)),
        ),
    ];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    let run_summary = stats.months[0].run.as_ref().unwrap();
    assert_eq!(run_summary.workout_count, 1);
    assert_close(run_summary.total_distance, 2.0);
    assert_eq!(run_summary.pace_samples, 0);
    assert_close(run_summary.average_pace, 0.0);
}

#[test]
fn test_heart_rate_compared_only_when_both_months_sampled() {
    let records = vec![
        hiit(1, "2024-01-10", "Tabata", 8),
        hiit_with(
            2,
            "2024-02-10",
            HiitPayload::new("Tabata", 8, 0.3, 0.2).with_heart_rate(160.0),
        ),
    ];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    assert_eq!(stats.months[0].heart_rate_samples, 0);
    assert_close(stats.months[0].average_heart_rate, 0.0);

    let comparison = stats.progress.ready().unwrap();
    assert!(comparison.average_heart_rate.is_none());
    assert!(comparison.average_run_distance.is_none());
    assert!(comparison.average_run_pace.is_none());
}

#[test]
fn test_lower_heart_rate_is_improvement() {
    let records = vec![
        hiit_with(
            1,
            "2024-01-10",
            HiitPayload::new("Tabata", 8, 0.3, 0.2).with_heart_rate(170.0),
        ),
        hiit_with(
            2,
            "2024-02-10",
            HiitPayload::new("Tabata", 8, 0.3, 0.2).with_heart_rate(160.0),
        ),
        hiit_with(
            3,
            "2024-02-12",
            HiitPayload::new("Tabata", 8, 0.3, 0.2).with_heart_rate(0.0),
        ),
    ];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    assert_eq!(stats.months[1].heart_rate_samples, 1);

    let heart_rate = stats
        .progress
        .ready()
        .and_then(|comparison| comparison.average_heart_rate.as_ref())
        .unwrap();
    assert_close(heart_rate.delta, 10.0);
    assert_eq!(heart_rate.direction, Direction::Positive);

    let sessions = &stats.progress.ready().unwrap().session_count;
    assert_close(sessions.delta, 1.0);
}

#[test]
fn test_configured_running_types() {
    let config = StatsConfig {
        running_hiit_types: vec!["Sprint".to_owned()],
        ..StatsConfig::default()
    };
    let records = vec![
        hiit_with(
            1,
            "2024-01-10",
            HiitPayload::new("sprint", 10, 0.5, 1.0).with_run(1.5, Some(6.0)),
        ),
        hiit_with(2, "2024-01-11", run(3.0, Some(8.0))),
    ];

    let stats = compute_hiit_stats(&records, &config);
    let run_summary = stats.months[0].run.as_ref().unwrap();
    assert_eq!(run_summary.workout_count, 1);
    assert_close(run_summary.total_distance, 1.5);
}

#[test]
fn test_run_pace_averages_only_reported_paces() {
    let records = vec![
        hiit_with(1, "2024-04-02", run(3.0, Some(8.0))),
        hiit_with(2, "2024-04-09", run(2.0, None)),
        hiit_with(3, "2024-04-16", run(4.0, Some(9.0))),
    ];

    let stats = compute_hiit_stats(&records, &StatsConfig::default());
    let run_summary = stats.months[0].run.as_ref().unwrap();
    assert_eq!(run_summary.workout_count, 3);
    assert_eq!(run_summary.pace_samples, 2);
    assert_close(run_summary.average_distance, 3.0);
    assert_close(run_summary.average_pace, 8.5);
}
