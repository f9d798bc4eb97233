// ABOUTME: Detection candidate models produced by external vision/object detectors
// ABOUTME: DetectionCandidate, RankedCandidate and the coarse FoodCategory enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Coarse food category reported by detectors and product databases
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Meat, fish, eggs, tofu
    Protein,
    /// Vegetables and leafy greens
    Vegetable,
    /// Whole fruit
    Fruit,
    /// Rice, bread, pasta, cereals
    Grain,
    /// Milk, cheese, yogurt
    Dairy,
    /// Oils, butter and spreads
    FatOil,
    /// Sauces, dressings and condiments
    SauceCondiment,
    /// Drinks of any kind
    Beverage,
    /// Packaged snacks and sweets
    Snack,
    /// Anything else
    Other,
}

impl FoodCategory {
    /// Parse a category label leniently; unknown labels map to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "protein" | "meat" | "fish" | "seafood" => Self::Protein,
            "vegetable" | "vegetables" | "veg" => Self::Vegetable,
            "fruit" | "fruits" => Self::Fruit,
            "grain" | "grains" | "cereal" | "bread" => Self::Grain,
            "dairy" => Self::Dairy,
            "fat_oil" | "fat" | "oil" | "fats" => Self::FatOil,
            "sauce_condiment" | "sauce" | "condiment" => Self::SauceCondiment,
            "beverage" | "beverages" | "drink" | "drinks" => Self::Beverage,
            "snack" | "snacks" | "candy" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// One raw food detection from an external detector
///
/// Treated as untrusted: names may be duplicated or out of domain, and the
/// confidence may fall outside `[0, 1]`. Use [`DetectionCandidate::confidence`]
/// for a sanitized value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectionCandidate {
    /// Detected food name
    pub name: String,
    /// Raw detector confidence, nominally in `[0, 1]`
    #[serde(rename = "confidence")]
    pub raw_confidence: f64,
    /// Detector-assigned category label (e.g. "protein")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Natural-language portion hint (e.g. "1 fillet")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion_hint: Option<String>,
}

impl DetectionCandidate {
    /// Create a candidate with no category or portion hint
    #[must_use]
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            raw_confidence: confidence,
            category: None,
            portion_hint: None,
        }
    }

    /// Attach a category label
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach a portion hint
    #[must_use]
    pub fn with_portion_hint(mut self, hint: impl Into<String>) -> Self {
        self.portion_hint = Some(hint.into());
        self
    }

    /// Confidence clamped into `[0, 1]`; non-finite values count as zero
    #[must_use]
    pub fn confidence(&self) -> f64 {
        if self.raw_confidence.is_finite() {
            self.raw_confidence.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Lowercased, trimmed name used for table lookups
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// Parsed coarse category, if a label was supplied
    #[must_use]
    pub fn food_category(&self) -> Option<FoodCategory> {
        self.category.as_deref().map(FoodCategory::from_str_lossy)
    }
}

/// A candidate together with its selection score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// The original detection
    #[serde(flatten)]
    pub candidate: DetectionCandidate,
    /// Confidence plus any class boost
    pub score: f64,
    /// Whether the candidate was recognised as protein-class
    pub is_protein: bool,
}

impl RankedCandidate {
    /// Candidate name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.candidate.name
    }
}
