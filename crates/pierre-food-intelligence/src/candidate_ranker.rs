// ABOUTME: Candidate ranker applying the protein boost and survival-guaranteed top-K selection
// ABOUTME: Ensures a confident protein detection is never truncated out of the final list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate Ranker
//!
//! Ranking happens in two steps:
//!
//! 1. **Boost**: `score = confidence`, plus `protein_boost` for protein-class
//!    candidates (category label `protein` or a known protein name). The boost
//!    is additive and always recomputed from the raw confidence, so boosting
//!    twice yields the same scores.
//! 2. **Survival selection**: candidates are stably sorted by score. Every
//!    protein candidate whose boosted score reaches `survival_threshold` is
//!    included first, even beyond `K`, and the remaining slots are filled from
//!    the sorted list.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::LazyLock;

use pierre_food_core::models::{DetectionCandidate, FoodCategory, RankedCandidate};
use tracing::debug;

use crate::config::intelligence::RankingConfig;

/// Slack for thresholds compared against sums of two-decimal values
const SCORE_EPSILON: f64 = 1e-9;

/// Names that count as protein even without a category label
static PROTEIN_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "salmon",
        "salmon fillet",
        "chicken",
        "chicken breast",
        "chicken thigh",
        "beef",
        "ground beef",
        "steak",
        "pork",
        "pork chop",
        "tuna",
        "shrimp",
        "prawns",
        "tofu",
        "tempeh",
        "egg",
        "eggs",
        "turkey",
        "fish",
        "lamb",
        "cod",
        "tilapia",
        "trout",
        "halibut",
    ]
    .into_iter()
    .collect()
});

/// Whether a candidate is protein-class by category label or name
#[must_use]
pub fn is_protein(candidate: &DetectionCandidate) -> bool {
    candidate.food_category() == Some(FoodCategory::Protein)
        || PROTEIN_NAMES.contains(candidate.normalized_name().as_str())
}

/// Compute selection scores, preserving input order
#[must_use]
pub fn boost_candidates(
    candidates: &[DetectionCandidate],
    config: &RankingConfig,
) -> Vec<RankedCandidate> {
    candidates
        .iter()
        .map(|candidate| {
            let protein = is_protein(candidate);
            let boost = if protein { config.protein_boost } else { 0.0 };
            RankedCandidate {
                candidate: candidate.clone(),
                score: candidate.confidence() + boost,
                is_protein: protein,
            }
        })
        .collect()
}

/// Select up to `top_k` candidates without dropping strong protein signals
///
/// The result lists surviving protein candidates first (by score), then the
/// best remaining candidates until `top_k` is reached. Survivors alone may
/// exceed `top_k`.
#[must_use]
pub fn select_with_survival(
    ranked: &[RankedCandidate],
    top_k: usize,
    config: &RankingConfig,
) -> Vec<RankedCandidate> {
    let mut order: Vec<usize> = (0..ranked.len()).collect();
    // sort_by is stable, so equal scores keep detector order
    order.sort_by(|&a, &b| by_score_desc(&ranked[a], &ranked[b]));

    let survivors: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&index| {
            let candidate = &ranked[index];
            candidate.is_protein && candidate.score + SCORE_EPSILON >= config.survival_threshold
        })
        .collect();

    if survivors.is_empty() {
        return order
            .into_iter()
            .take(top_k)
            .map(|index| ranked[index].clone())
            .collect();
    }

    debug!(
        survivors = survivors.len(),
        top_k, "Protein candidates guaranteed a slot"
    );

    let mut selected = survivors.clone();
    for index in order {
        if selected.len() >= top_k {
            break;
        }
        if !survivors.contains(&index) {
            selected.push(index);
        }
    }

    selected
        .into_iter()
        .map(|index| ranked[index].clone())
        .collect()
}

/// Boost and select in one step
///
/// `top_k` defaults to `config.default_top_k`.
#[must_use]
pub fn rank_candidates(
    candidates: &[DetectionCandidate],
    top_k: Option<usize>,
    config: &RankingConfig,
) -> Vec<RankedCandidate> {
    let boosted = boost_candidates(candidates, config);
    select_with_survival(&boosted, top_k.unwrap_or(config.default_top_k), config)
}

fn by_score_desc(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score.total_cmp(&a.score)
}
