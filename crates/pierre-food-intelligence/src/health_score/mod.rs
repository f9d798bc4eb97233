// ABOUTME: Health score engine producing a bounded 0-100 score with an auditable breakdown
// ABOUTME: Clamps nutrition inputs to physiological domains, then applies weighted penalties and bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Score Engine
//!
//! # Formula
//!
//! Each input is zero-filled when missing, clamped into `[0, domain max]` and
//! expressed as a percentage of its domain (`X%`). Then:
//!
//! ```text
//! penalties = 0.35*sugar% + 0.20*satfat% + 0.15*sodium% + 0.10*calories%
//!           + 0.10*additives% + (10 if ultra-processed)
//! bonuses   = 0.06*fiber% + 0.04*protein%
//! score     = clamp(round(100 - penalties + bonuses), 0, 100)
//! ```
//!
//! Calories are taken per serving; every other nutrient per 100 g. Weights and
//! domains come from [`ScoringConfig`]. The result is deterministic and total
//! over its input domain.

pub mod ingredients;

pub use ingredients::{count_additives, looks_ultra_processed};

use pierre_food_core::models::{
    HealthScoreResult, NormalizedNutrition, NutritionFacts, ScoreBreakdown,
};
use tracing::debug;

use crate::config::intelligence::{ScoreDomains, ScoringConfig};

/// Zero-fill, sanitize and clamp every scoring input
#[must_use]
pub fn normalize_nutrition(facts: &NutritionFacts, domains: &ScoreDomains) -> NormalizedNutrition {
    let per_100g = &facts.per_100g;
    let calories_per_serving = facts
        .per_serving
        .as_ref()
        .and_then(|serving| serving.calories);

    NormalizedNutrition {
        calories_per_serving: clamp_to_domain(calories_per_serving, domains.calories_per_serving),
        sugar_g_per_100g: clamp_to_domain(per_100g.sugar_g, domains.sugar_g_per_100g),
        saturated_fat_g_per_100g: clamp_to_domain(
            per_100g.saturated_fat_g,
            domains.saturated_fat_g_per_100g,
        ),
        sodium_mg_per_100g: clamp_to_domain(per_100g.sodium_mg, domains.sodium_mg_per_100g),
        fiber_g_per_100g: clamp_to_domain(per_100g.fiber_g, domains.fiber_g_per_100g),
        protein_g_per_100g: clamp_to_domain(per_100g.protein_g, domains.protein_g_per_100g),
        additive_count: clamp_to_domain(
            facts.additive_count.map(f64::from),
            domains.additive_count,
        ),
        ultra_processed: facts.ultra_processed,
    }
}

/// Score nutrition facts on a 0-100 scale
#[must_use]
pub fn calculate_health_score(facts: &NutritionFacts, config: &ScoringConfig) -> HealthScoreResult {
    let domains = &config.domains;
    let weights = &config.weights;
    let normalized = normalize_nutrition(facts, domains);

    let ultra_processed_penalty = if normalized.ultra_processed {
        config.ultra_processed_penalty
    } else {
        0.0
    };

    let penalties = weights.sugar * percent(normalized.sugar_g_per_100g, domains.sugar_g_per_100g)
        + weights.saturated_fat
            * percent(
                normalized.saturated_fat_g_per_100g,
                domains.saturated_fat_g_per_100g,
            )
        + weights.sodium * percent(normalized.sodium_mg_per_100g, domains.sodium_mg_per_100g)
        + weights.calories
            * percent(
                normalized.calories_per_serving,
                domains.calories_per_serving,
            )
        + weights.additives * percent(normalized.additive_count, domains.additive_count)
        + ultra_processed_penalty;

    let bonuses = weights.fiber_bonus
        * percent(normalized.fiber_g_per_100g, domains.fiber_g_per_100g)
        + weights.protein_bonus * percent(normalized.protein_g_per_100g, domains.protein_g_per_100g);

    let raw = (100.0 - penalties + bonuses).round();
    let final_score = if raw.is_finite() {
        raw.clamp(0.0, 100.0) as u8
    } else {
        0
    };

    debug!(final_score, penalties, bonuses, "Computed health score");

    HealthScoreResult {
        final_score,
        components: ScoreBreakdown {
            penalties,
            bonuses,
            normalized,
        },
    }
}

/// Missing or non-numeric values count as zero; the rest are clamped to `[0, max]`
fn clamp_to_domain(value: Option<f64>, max: f64) -> f64 {
    value
        .filter(|v| !v.is_nan())
        .map_or(0.0, |v| v.clamp(0.0, max.max(0.0)))
}

/// Share of the domain as a percentage; zero for degenerate domains
fn percent(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max * 100.0
    } else {
        0.0
    }
}
