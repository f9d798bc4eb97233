// ABOUTME: Integration tests for the candidate quality filter
// ABOUTME: Validates citrus throttle thresholds, order preservation and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_food_pipeline::config::intelligence::{ExclusiveGroup, FilterConfig};
use pierre_food_pipeline::intelligence::{filter_candidates, throttle_citrus};
use pierre_food_pipeline::models::DetectionCandidate;

fn names(candidates: &[DetectionCandidate]) -> Vec<String> {
    candidates.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_close_citrus_keeps_only_higher_confidence() {
    common::init_test_logging();
    let filtered = throttle_citrus(&[
        DetectionCandidate::new("lemon", 0.9),
        DetectionCandidate::new("lime", 0.85),
    ]);
    assert_eq!(names(&filtered), vec!["lemon"]);
}

#[test]
fn test_distant_citrus_keeps_both() {
    let filtered = throttle_citrus(&[
        DetectionCandidate::new("lemon", 0.9),
        DetectionCandidate::new("lime", 0.5),
    ]);
    assert_eq!(names(&filtered), vec!["lemon", "lime"]);
}

#[test]
fn test_salmon_plate_drops_lime() {
    let filtered = filter_candidates(&common::salmon_plate(), &FilterConfig::default());
    assert_eq!(names(&filtered), vec!["salmon", "lemon", "asparagus"]);
}

#[test]
fn test_input_is_not_mutated() {
    let input = common::salmon_plate();
    let snapshot = input.clone();
    let _ = filter_candidates(&input, &FilterConfig::default());
    assert_eq!(input, snapshot);
}

#[test]
fn test_filtering_twice_is_a_no_op() {
    let config = FilterConfig::default();
    for plate in [
        common::salmon_plate(),
        vec![
            DetectionCandidate::new("lime", 0.95),
            DetectionCandidate::new("lemon", 0.2),
            DetectionCandidate::new("rice", 0.4),
        ],
    ] {
        let once = filter_candidates(&plate, &config);
        assert_eq!(filter_candidates(&once, &config), once);
    }
}

#[test]
fn test_out_of_range_confidences_are_sanitized() {
    // 1.7 clamps to 1.0, so the gap to 0.9 is within the threshold
    let filtered = throttle_citrus(&[
        DetectionCandidate::new("lime", 0.9),
        DetectionCandidate::new("lemon", 1.7),
    ]);
    assert_eq!(names(&filtered), vec!["lemon"]);

    let with_nan = throttle_citrus(&[
        DetectionCandidate::new("lemon", f64::NAN),
        DetectionCandidate::new("lime", 0.1),
    ]);
    assert_eq!(names(&with_nan), vec!["lime"]);
}

#[test]
fn test_empty_group_list_is_identity() {
    let config = FilterConfig {
        exclusive_groups: Vec::new(),
    };
    let plate = common::salmon_plate();
    assert_eq!(filter_candidates(&plate, &config), plate);
}

#[test]
fn test_tighter_gap_keeps_both() {
    let mut group = ExclusiveGroup::citrus();
    group.max_confidence_gap = 0.01;
    let config = FilterConfig {
        exclusive_groups: vec![group],
    };
    let filtered = filter_candidates(&common::salmon_plate(), &config);
    assert_eq!(filtered.len(), 4);
}
