// ABOUTME: Default keyword tables used to classify strength exercises into display groups
// ABOUTME: Groups are tested in declaration order; the first keyword match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Upper body pushing movements
pub const UPPER_BODY_PUSH: &str = "Upper Body Push";
/// Upper body pulling movements
pub const UPPER_BODY_PULL: &str = "Upper Body Pull";
/// Squat, hinge and single-leg movements
pub const LOWER_BODY: &str = "Lower Body";
/// Trunk work
pub const CORE: &str = "Core";

/// Keywords for [`UPPER_BODY_PUSH`]
pub const UPPER_BODY_PUSH_KEYWORDS: &[&str] = &[
    "Bench Press",
    "Overhead Press",
    "Incline Press",
    "Dips",
    "Pushups",
];

/// Keywords for [`UPPER_BODY_PULL`]
pub const UPPER_BODY_PULL_KEYWORDS: &[&str] =
    &["Pull Up", "Chin Up", "Row", "Lat Pulldown", "Face Pull"];

/// Keywords for [`LOWER_BODY`]
pub const LOWER_BODY_KEYWORDS: &[&str] = &[
    "Squat",
    "Deadlift",
    "Leg Press",
    "Lunge",
    "Romanian Deadlift",
    "Leg Extension",
    "Leg Curl",
];

/// Keywords for [`CORE`]
pub const CORE_KEYWORDS: &[&str] = &["Plank", "Ab Rollout", "Sit Up", "Leg Raise", "Russian Twist"];

/// All default groups in classification order
pub const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    (UPPER_BODY_PUSH, UPPER_BODY_PUSH_KEYWORDS),
    (UPPER_BODY_PULL, UPPER_BODY_PULL_KEYWORDS),
    (LOWER_BODY, LOWER_BODY_KEYWORDS),
    (CORE, CORE_KEYWORDS),
];
