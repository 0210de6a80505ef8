// ABOUTME: Keyword classification of strength exercises into display groups
// ABOUTME: First matching group wins; unmatched exercises fall into the catch-all group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ExerciseGroup;
use indexmap::IndexMap;
use workout_core::constants::labels::OTHER_GROUP;

/// Group name for an exercise
///
/// Groups are tested in order and the first one with a keyword contained in
/// the name (ignoring case) wins.
#[must_use]
pub fn classify_exercise<'a>(exercise_name: &str, groups: &'a [ExerciseGroup]) -> &'a str {
    groups
        .iter()
        .find(|group| group.matches(exercise_name))
        .map_or(OTHER_GROUP, |group| group.name.as_str())
}

/// Bucket exercise names by group
///
/// Groups appear in the order their first exercise appears; exercises keep
/// their input order within a group.
#[must_use]
pub fn group_exercises<'n, I>(names: I, groups: &[ExerciseGroup]) -> IndexMap<String, Vec<&'n str>>
where
    I: IntoIterator<Item = &'n str>,
{
    let mut grouped: IndexMap<String, Vec<&'n str>> = IndexMap::new();
    for name in names {
        grouped
            .entry(classify_exercise(name, groups).to_owned())
            .or_default()
            .push(name);
    }
    grouped
}
