// ABOUTME: Candidate ranking configuration for protein boosting and top-K survival
// ABOUTME: Configures the additive protein boost, survival threshold and default list size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_food_core::constants::ranking::{
    DEFAULT_TOP_K, PROTEIN_BOOST, PROTEIN_SURVIVAL_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Candidate ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Added to the confidence of protein-class candidates
    pub protein_boost: f64,
    /// Boosted score a protein candidate needs to be exempt from truncation
    pub survival_threshold: f64,
    /// List size used when the caller does not pick one
    pub default_top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            protein_boost: PROTEIN_BOOST,
            survival_threshold: PROTEIN_SURVIVAL_THRESHOLD,
            default_top_k: DEFAULT_TOP_K,
        }
    }
}
