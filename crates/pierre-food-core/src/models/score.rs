// ABOUTME: Health score result models with an auditable breakdown
// ABOUTME: HealthScoreResult, ScoreBreakdown and the clamped NormalizedNutrition inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Scoring inputs after zero-filling and clamping into their domains
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedNutrition {
    /// Calories per serving (kcal)
    pub calories_per_serving: f64,
    /// Sugar per 100 g (g)
    pub sugar_g_per_100g: f64,
    /// Saturated fat per 100 g (g)
    pub saturated_fat_g_per_100g: f64,
    /// Sodium per 100 g (mg)
    pub sodium_mg_per_100g: f64,
    /// Fiber per 100 g (g)
    pub fiber_g_per_100g: f64,
    /// Protein per 100 g (g)
    pub protein_g_per_100g: f64,
    /// Additive count
    pub additive_count: f64,
    /// Ultra-processed flag
    pub ultra_processed: bool,
}

/// Intermediate values behind a final score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Total penalty points subtracted from 100
    pub penalties: f64,
    /// Total bonus points added back
    pub bonuses: f64,
    /// Inputs actually used
    pub normalized: NormalizedNutrition,
}

/// Bounded 0-100 health score with its breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreResult {
    /// Final score, always within `[0, 100]`
    pub final_score: u8,
    /// Auditable components
    pub components: ScoreBreakdown,
}

impl HealthScoreResult {
    /// Score on a 0-10 scale
    #[must_use]
    pub fn out_of_ten(&self) -> u8 {
        ((f64::from(self.final_score) / 10.0).round() as u8).min(10)
    }

    /// Score as 0-5 stars in half-star steps
    #[must_use]
    pub fn stars(&self) -> f64 {
        let stars = f64::from(self.final_score) / 100.0 * 5.0;
        (stars * 2.0).round() / 2.0
    }
}
