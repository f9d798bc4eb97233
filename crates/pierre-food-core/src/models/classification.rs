// ABOUTME: Canonical food classification models and generic macro records
// ABOUTME: ClassificationResult from pattern matching, per-100 g generic macros and fallback records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::nutrition::NutrientProfile;

/// Outcome of matching free text against the canonical class patterns
///
/// A `None` class id is an expected outcome meaning "use another nutrition source".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Stable key into the generic macro table
    pub class_id: Option<String>,
    /// Match confidence (0 when nothing matched)
    pub confidence: f64,
    /// Source text of the pattern that matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<String>,
}

impl ClassificationResult {
    /// The "no canonical match" result
    #[must_use]
    pub const fn unmatched() -> Self {
        Self {
            class_id: None,
            confidence: 0.0,
            matched_pattern: None,
        }
    }

    /// Whether a class matched
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.class_id.is_some()
    }
}

/// Reference macros per 100 g for one canonical class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GenericMacroRecord {
    /// Energy (kcal per 100 g)
    pub calories: f64,
    /// Protein (g per 100 g)
    pub protein: f64,
    /// Carbohydrates (g per 100 g)
    pub carbs: f64,
    /// Fat (g per 100 g)
    pub fat: f64,
}

/// Generic nutrition baseline returned when no live enrichment exists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenericFoodRecord {
    /// Canonical class the record was derived from
    pub class_id: String,
    /// Display name (override or the class display name)
    pub name: String,
    /// Per-100 g profile; fiber, sugar and sodium are zero-filled
    pub per_100g: NutrientProfile,
    /// Echo of per-100 g calories
    pub calories: f64,
    /// Echo of per-100 g protein
    pub protein: f64,
    /// Echo of per-100 g carbohydrates
    pub carbs: f64,
    /// Echo of per-100 g fat
    pub fat: f64,
    /// Always true: values are class averages, not measurements
    pub is_estimated: bool,
}
