// ABOUTME: Candidate quality filter that suppresses detector noise before ranking
// ABOUTME: Collapses near-duplicate mutually-exclusive detections such as lemon versus lime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate Filter
//!
//! Detectors often label a single object with several look-alike classes. An
//! [`ExclusiveGroup`] lists such classes; when the two most confident members
//! are within the group's confidence gap, only the best survives. When the gap
//! is wider, both are plausibly on the plate and everything is kept.
//!
//! Filtering never mutates its input and preserves the relative order of every
//! candidate it keeps, so running it twice is a no-op.

use std::cmp::Ordering;

use pierre_food_core::models::DetectionCandidate;
use tracing::{debug, trace};

use crate::config::intelligence::{ExclusiveGroup, FilterConfig};

/// Slack for floating point gaps computed from two-decimal detector scores
const GAP_EPSILON: f64 = 1e-9;

/// Run every configured quality throttle over a detector list
///
/// This is the single entry point for class-specific throttles; groups are
/// applied in configuration order.
#[must_use]
pub fn filter_candidates(
    candidates: &[DetectionCandidate],
    config: &FilterConfig,
) -> Vec<DetectionCandidate> {
    let mut filtered = candidates.to_vec();
    for group in &config.exclusive_groups {
        filtered = apply_exclusive_group(&filtered, group);
    }
    filtered
}

/// Collapse lemon/lime detections that are too close to call
#[must_use]
pub fn throttle_citrus(candidates: &[DetectionCandidate]) -> Vec<DetectionCandidate> {
    apply_exclusive_group(candidates, &ExclusiveGroup::citrus())
}

/// Apply one mutually-exclusive group to a candidate list
///
/// Members are matched case-insensitively. With at most one member present the
/// input is returned unchanged. Otherwise the best two members by confidence
/// are compared (ties go to the earlier detection) and, if their gap is within
/// `group.max_confidence_gap`, every member except the best is dropped.
#[must_use]
pub fn apply_exclusive_group(
    candidates: &[DetectionCandidate],
    group: &ExclusiveGroup,
) -> Vec<DetectionCandidate> {
    let mut members: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| group.contains(&candidate.name))
        .map(|(index, _)| index)
        .collect();

    if members.len() <= 1 {
        return candidates.to_vec();
    }

    members.sort_by(|&a, &b| by_confidence_desc(&candidates[a], &candidates[b]));
    let best = members[0];
    let gap = candidates[best].confidence() - candidates[members[1]].confidence();

    if gap > group.max_confidence_gap + GAP_EPSILON {
        trace!(
            group = %group.name,
            gap,
            "Exclusive group members far enough apart, keeping all"
        );
        return candidates.to_vec();
    }

    debug!(
        group = %group.name,
        kept = %candidates[best].name,
        dropped = members.len() - 1,
        gap,
        "Collapsed mutually-exclusive detections"
    );

    candidates
        .iter()
        .enumerate()
        .filter(|(index, candidate)| *index == best || !group.contains(&candidate.name))
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

fn by_confidence_desc(a: &DetectionCandidate, b: &DetectionCandidate) -> Ordering {
    b.confidence().total_cmp(&a.confidence())
}
