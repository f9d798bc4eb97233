// ABOUTME: Food intelligence configuration for candidate ranking, portions and health scoring
// ABOUTME: Orchestrates stage-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Intelligence Configuration Module
//!
//! Every tunable constant of the food signal pipeline lives here, grouped by
//! stage:
//! - `filter` - Mutually-exclusive variant groups (citrus throttle)
//! - `ranking` - Protein boost, survival threshold, default list size
//! - `classification` - Pattern match confidences
//! - `portion` - Portion waterfall bounds and confidences
//! - `scoring` - Health score domains and weights
//!
//! Algorithms take their config slice by reference; [`FoodIntelligenceConfig::global`]
//! is only a convenience for callers that want environment-driven defaults.

pub mod classification;
pub mod error;
pub mod filter;
pub mod portion;
pub mod ranking;
pub mod scoring;

pub use classification::ClassificationConfig;
pub use error::ConfigError;
pub use filter::{ExclusiveGroup, FilterConfig};
pub use portion::{
    DeclaredPortionConfig, EstimatedPortionConfig, FallbackPortionConfig, PortionConfig,
    RatioPortionConfig,
};
pub use ranking::RankingConfig;
pub use scoring::{ScoreDomains, ScoreWeights, ScoringConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static FOOD_INTELLIGENCE_CONFIG: OnceLock<FoodIntelligenceConfig> = OnceLock::new();

/// Expected sum of the five penalty weights
const PENALTY_WEIGHT_TOTAL: f64 = 0.9;

/// Accepted deviation from [`PENALTY_WEIGHT_TOTAL`]
const PENALTY_WEIGHT_TOLERANCE: f64 = 0.05;

/// Main food intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodIntelligenceConfig {
    /// Candidate filter configuration
    pub filter: FilterConfig,
    /// Candidate ranking configuration
    pub ranking: RankingConfig,
    /// Class inference configuration
    pub classification: ClassificationConfig,
    /// Portion resolver configuration
    pub portion: PortionConfig,
    /// Health score configuration
    pub scoring: ScoringConfig,
}

impl FoodIntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        FOOD_INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load food intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_filter()?;
        self.validate_ranking()?;
        self.validate_classification()?;
        self.validate_portion()?;
        self.validate_scoring()
    }

    fn validate_filter(&self) -> Result<(), ConfigError> {
        for group in &self.filter.exclusive_groups {
            if group.members.len() < 2 {
                return Err(ConfigError::InvalidGroup {
                    group: group.name.clone(),
                    reason: "needs at least two members",
                });
            }
            if group.members.iter().any(|member| member.trim().is_empty()) {
                return Err(ConfigError::InvalidGroup {
                    group: group.name.clone(),
                    reason: "members must not be blank",
                });
            }
            if !(0.0..=1.0).contains(&group.max_confidence_gap) {
                return Err(ConfigError::ValueOutOfRange(
                    "exclusive group max_confidence_gap must be in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    fn validate_ranking(&self) -> Result<(), ConfigError> {
        let ranking = &self.ranking;
        if !(0.0..=1.0).contains(&ranking.protein_boost) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_boost must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0 + ranking.protein_boost).contains(&ranking.survival_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "survival_threshold must be reachable by a boosted score",
            ));
        }
        if ranking.default_top_k == 0 {
            return Err(ConfigError::ValueOutOfRange("default_top_k must be > 0"));
        }
        Ok(())
    }

    fn validate_classification(&self) -> Result<(), ConfigError> {
        let classification = &self.classification;
        if !is_confidence(classification.anchored_confidence)
            || !is_confidence(classification.substring_confidence)
        {
            return Err(ConfigError::ValueOutOfRange(
                "classification confidences must be in [0, 1]",
            ));
        }
        if classification.substring_confidence > classification.anchored_confidence {
            return Err(ConfigError::InvalidRange(
                "substring_confidence must be <= anchored_confidence",
            ));
        }
        Ok(())
    }

    fn validate_portion(&self) -> Result<(), ConfigError> {
        let portion = &self.portion;
        if portion.ratio.min_grams <= 0.0 || portion.ratio.min_grams >= portion.ratio.max_grams {
            return Err(ConfigError::InvalidRange(
                "ratio min_grams must be positive and < max_grams",
            ));
        }
        if portion.declared.min_grams <= 0.0
            || portion.declared.min_grams >= portion.declared.max_grams
        {
            return Err(ConfigError::InvalidRange(
                "declared min_grams must be positive and < max_grams",
            ));
        }
        if portion.fallback.default_grams <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback default_grams must be > 0",
            ));
        }
        if portion.estimates.token_ml_density <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("token_ml_density must be > 0"));
        }

        // Trust order, strongest first
        let ladder = [
            portion.declared.user_confidence,
            portion.declared.ocr_confidence,
            portion.declared.db_confidence,
            portion.ratio.calories_confidence,
            portion.ratio.protein_confidence.max(portion.ratio.carbs_confidence),
            portion.estimates.category_confidence,
            portion.estimates.token_confidence,
            portion.fallback.category_confidence,
            portion.fallback.default_confidence,
        ];
        if !ladder.iter().copied().all(is_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "portion confidences must be in [0, 1]",
            ));
        }
        if ladder.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::InvalidRange(
                "portion confidences must not increase down the waterfall",
            ));
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let domains = &self.scoring.domains;
        let domain_maxima = [
            domains.calories_per_serving,
            domains.sugar_g_per_100g,
            domains.saturated_fat_g_per_100g,
            domains.sodium_mg_per_100g,
            domains.fiber_g_per_100g,
            domains.protein_g_per_100g,
            domains.additive_count,
        ];
        if domain_maxima.iter().any(|max| *max <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "score domain maxima must be > 0",
            ));
        }

        let weights = &self.scoring.weights;
        let all_weights = [
            weights.sugar,
            weights.saturated_fat,
            weights.sodium,
            weights.calories,
            weights.additives,
            weights.fiber_bonus,
            weights.protein_bonus,
        ];
        if all_weights.iter().any(|weight| *weight < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "score weights must be non-negative",
            ));
        }
        if (weights.penalty_total() - PENALTY_WEIGHT_TOTAL).abs() > PENALTY_WEIGHT_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "score penalty weights should approximately sum to 0.9",
            ));
        }
        if self.scoring.ultra_processed_penalty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "ultra_processed_penalty must be >= 0",
            ));
        }
        Ok(())
    }

    /// Parse and apply one environment override; unset variables are skipped
    fn apply_env_var<T: FromStr>(
        env_var_name: &'static str,
        target: &mut T,
    ) -> Result<(), ConfigError> {
        let value = match env::var(env_var_name) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(source) => {
                return Err(ConfigError::EnvVar {
                    name: env_var_name,
                    source,
                })
            }
        };
        *target = value.trim().parse().map_err(|_| ConfigError::Parse {
            name: env_var_name,
            value: value.clone(),
        })?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Filter overrides
        if let Some(citrus) = self
            .filter
            .exclusive_groups
            .iter_mut()
            .find(|group| group.name == "citrus")
        {
            Self::apply_env_var("FOOD_FILTER_CITRUS_GAP", &mut citrus.max_confidence_gap)?;
        }

        // Ranking overrides
        Self::apply_env_var(
            "FOOD_RANKING_PROTEIN_BOOST",
            &mut self.ranking.protein_boost,
        )?;
        Self::apply_env_var(
            "FOOD_RANKING_SURVIVAL_THRESHOLD",
            &mut self.ranking.survival_threshold,
        )?;
        Self::apply_env_var("FOOD_RANKING_TOP_K", &mut self.ranking.default_top_k)?;

        // Portion overrides
        Self::apply_env_var(
            "FOOD_PORTION_FALLBACK_GRAMS",
            &mut self.portion.fallback.default_grams,
        )?;
        Self::apply_env_var(
            "FOOD_PORTION_RATIO_MIN_GRAMS",
            &mut self.portion.ratio.min_grams,
        )?;
        Self::apply_env_var(
            "FOOD_PORTION_RATIO_MAX_GRAMS",
            &mut self.portion.ratio.max_grams,
        )?;
        Self::apply_env_var(
            "FOOD_PORTION_DECLARED_MAX_GRAMS",
            &mut self.portion.declared.max_grams,
        )?;

        // Scoring overrides
        let weights = &mut self.scoring.weights;
        Self::apply_env_var("FOOD_SCORE_SUGAR_WEIGHT", &mut weights.sugar)?;
        Self::apply_env_var("FOOD_SCORE_SATURATED_FAT_WEIGHT", &mut weights.saturated_fat)?;
        Self::apply_env_var("FOOD_SCORE_SODIUM_WEIGHT", &mut weights.sodium)?;
        Self::apply_env_var("FOOD_SCORE_CALORIES_WEIGHT", &mut weights.calories)?;
        Self::apply_env_var("FOOD_SCORE_ADDITIVES_WEIGHT", &mut weights.additives)?;
        Self::apply_env_var("FOOD_SCORE_FIBER_BONUS", &mut weights.fiber_bonus)?;
        Self::apply_env_var("FOOD_SCORE_PROTEIN_BONUS", &mut weights.protein_bonus)?;
        Self::apply_env_var(
            "FOOD_SCORE_ULTRA_PROCESSED_PENALTY",
            &mut self.scoring.ultra_processed_penalty,
        )?;

        Ok(self)
    }
}

fn is_confidence(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
