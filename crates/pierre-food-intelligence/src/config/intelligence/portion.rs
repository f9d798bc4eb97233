// ABOUTME: Portion resolver configuration for the gram estimation waterfall
// ABOUTME: Configures plausibility bounds and per-strategy confidence values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Portion Resolver Configuration
//!
//! Confidence values encode trust order: user > declared > ratio > category >
//! size token > fallback. Validation enforces that order so a misconfigured
//! deployment cannot rank a guess above a declaration.

use pierre_food_core::constants::portions::{
    DECLARED_MAX_GRAMS, DECLARED_MIN_GRAMS, DEFAULT_PORTION_GRAMS, RATIO_MAX_GRAMS,
    RATIO_MIN_GRAMS, WATER_DENSITY_G_PER_ML,
};
use serde::{Deserialize, Serialize};

/// Portion resolver configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Declared serving (user, OCR, database) settings
    pub declared: DeclaredPortionConfig,
    /// Nutrient-ratio computation settings
    pub ratio: RatioPortionConfig,
    /// Category median and size-token settings
    pub estimates: EstimatedPortionConfig,
    /// Last-resort defaults
    pub fallback: FallbackPortionConfig,
}

/// Declared serving settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclaredPortionConfig {
    /// Smallest accepted declared serving (g)
    pub min_grams: f64,
    /// Largest accepted declared serving (g)
    pub max_grams: f64,
    /// Confidence for user overrides
    pub user_confidence: f64,
    /// Confidence for OCR-declared servings
    pub ocr_confidence: f64,
    /// Confidence for database-declared servings
    pub db_confidence: f64,
}

/// Nutrient-ratio computation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioPortionConfig {
    /// Smallest plausible computed portion (g)
    pub min_grams: f64,
    /// Largest plausible computed portion (g)
    pub max_grams: f64,
    /// Confidence when derived from calories
    pub calories_confidence: f64,
    /// Confidence when derived from protein
    pub protein_confidence: f64,
    /// Confidence when derived from carbohydrates
    pub carbs_confidence: f64,
}

/// Category median and size-token settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedPortionConfig {
    /// Confidence for category median estimates
    pub category_confidence: f64,
    /// Confidence for size-token estimates
    pub token_confidence: f64,
    /// Density applied to millilitre size tokens (g/ml)
    pub token_ml_density: f64,
}

/// Last-resort defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackPortionConfig {
    /// Global default portion (g)
    pub default_grams: f64,
    /// Confidence of the global default
    pub default_confidence: f64,
    /// Confidence of a coarse-category default
    pub category_confidence: f64,
}

impl Default for DeclaredPortionConfig {
    fn default() -> Self {
        Self {
            min_grams: DECLARED_MIN_GRAMS,
            max_grams: DECLARED_MAX_GRAMS,
            user_confidence: 1.0,
            ocr_confidence: 0.9,
            db_confidence: 0.85,
        }
    }
}

impl Default for RatioPortionConfig {
    fn default() -> Self {
        Self {
            min_grams: RATIO_MIN_GRAMS,
            max_grams: RATIO_MAX_GRAMS,
            calories_confidence: 0.7,
            protein_confidence: 0.6,
            carbs_confidence: 0.6,
        }
    }
}

impl Default for EstimatedPortionConfig {
    fn default() -> Self {
        Self {
            category_confidence: 0.45,
            token_confidence: 0.35,
            token_ml_density: WATER_DENSITY_G_PER_ML,
        }
    }
}

impl Default for FallbackPortionConfig {
    fn default() -> Self {
        Self {
            default_grams: DEFAULT_PORTION_GRAMS,
            default_confidence: 0.1,
            category_confidence: 0.15,
        }
    }
}
