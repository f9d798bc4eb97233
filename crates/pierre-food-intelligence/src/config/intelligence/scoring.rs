// ABOUTME: Health score configuration for clamp domains and formula weights
// ABOUTME: Configures physiological ranges, penalty and bonus weights, ultra-processed penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Score Configuration
//!
//! Each nutrient is clamped into `[0, domain max]` and expressed as a
//! percentage of that domain before weighting. The default weights were tuned
//! empirically and are exposed so they can be calibrated without touching the
//! formula.

use pierre_food_core::constants::score_domains::{
    MAX_ADDITIVE_COUNT, MAX_CALORIES_PER_SERVING, MAX_FIBER_G_PER_100G, MAX_PROTEIN_G_PER_100G,
    MAX_SATURATED_FAT_G_PER_100G, MAX_SODIUM_MG_PER_100G, MAX_SUGAR_G_PER_100G,
};
use serde::{Deserialize, Serialize};

/// Health score configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Upper bound of each input domain
    pub domains: ScoreDomains,
    /// Weight applied to each percentage-of-domain contribution
    pub weights: ScoreWeights,
    /// Flat penalty for ultra-processed foods
    pub ultra_processed_penalty: f64,
}

/// Upper bounds of the clamp domains (lower bound is always zero)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDomains {
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
}

/// Penalty and bonus weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Sugar penalty weight
    pub sugar: f64,
    /// Saturated fat penalty weight
    pub saturated_fat: f64,
    /// Sodium penalty weight
    pub sodium: f64,
    /// Calorie penalty weight
    pub calories: f64,
    /// Additive penalty weight
    pub additives: f64,
    /// Fiber bonus weight
    pub fiber_bonus: f64,
    /// Protein bonus weight
    pub protein_bonus: f64,
}

impl ScoreWeights {
    /// Sum of the penalty weights
    #[must_use]
    pub fn penalty_total(&self) -> f64 {
        self.sugar + self.saturated_fat + self.sodium + self.calories + self.additives
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            domains: ScoreDomains::default(),
            weights: ScoreWeights::default(),
            ultra_processed_penalty: 10.0,
        }
    }
}

impl Default for ScoreDomains {
    fn default() -> Self {
        Self {
            calories_per_serving: MAX_CALORIES_PER_SERVING,
            sugar_g_per_100g: MAX_SUGAR_G_PER_100G,
            saturated_fat_g_per_100g: MAX_SATURATED_FAT_G_PER_100G,
            sodium_mg_per_100g: MAX_SODIUM_MG_PER_100G,
            fiber_g_per_100g: MAX_FIBER_G_PER_100G,
            protein_g_per_100g: MAX_PROTEIN_G_PER_100G,
            additive_count: MAX_ADDITIVE_COUNT,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            sugar: 0.35,
            saturated_fat: 0.20,
            sodium: 0.15,
            calories: 0.10,
            additives: 0.10,
            fiber_bonus: 0.06,
            protein_bonus: 0.04,
        }
    }
}
