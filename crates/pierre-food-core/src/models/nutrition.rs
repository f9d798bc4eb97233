// ABOUTME: Nutrition fact models normalized per 100 g and per serving
// ABOUTME: NutrientProfile holds optional macro/micro fields; NutritionFacts pairs profiles with flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A set of nutrient amounts for one reference quantity
///
/// Every field is optional: OCR and product databases routinely omit values.
/// Consumers decide how to treat absence (the score engine zero-fills).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    /// Energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Total fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Saturated fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat_g: Option<f64>,
    /// Sugars (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Dietary fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Sodium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
}

impl NutrientProfile {
    /// True when no field carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein_g.is_none()
            && self.carbs_g.is_none()
            && self.fat_g.is_none()
            && self.saturated_fat_g.is_none()
            && self.sugar_g.is_none()
            && self.fiber_g.is_none()
            && self.sodium_mg.is_none()
    }

    /// Fill every missing field from `baseline`; present values are kept
    pub fn fill_missing_from(&mut self, baseline: &Self) {
        self.calories = self.calories.or(baseline.calories);
        self.protein_g = self.protein_g.or(baseline.protein_g);
        self.carbs_g = self.carbs_g.or(baseline.carbs_g);
        self.fat_g = self.fat_g.or(baseline.fat_g);
        self.saturated_fat_g = self.saturated_fat_g.or(baseline.saturated_fat_g);
        self.sugar_g = self.sugar_g.or(baseline.sugar_g);
        self.fiber_g = self.fiber_g.or(baseline.fiber_g);
        self.sodium_mg = self.sodium_mg.or(baseline.sodium_mg);
    }
}

/// Nutrition facts for one food item as handed over by OCR or product lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Values normalized to 100 g
    #[serde(default)]
    pub per_100g: NutrientProfile,
    /// Values for the declared serving, when the source provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_serving: Option<NutrientProfile>,
    /// Number of additives detected in the ingredient list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additive_count: Option<u32>,
    /// Ultra-processed classification flag
    #[serde(default)]
    pub ultra_processed: bool,
}

impl NutritionFacts {
    /// Facts with only a per-100 g profile
    #[must_use]
    pub fn per_100g(profile: NutrientProfile) -> Self {
        Self {
            per_100g: profile,
            ..Self::default()
        }
    }

    /// Attach a per-serving profile
    #[must_use]
    pub fn with_per_serving(mut self, profile: NutrientProfile) -> Self {
        self.per_serving = Some(profile);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_missing_keeps_present_values() {
        let mut label = NutrientProfile {
            calories: Some(300.0),
            sugar_g: Some(12.0),
            ..NutrientProfile::default()
        };
        let baseline = NutrientProfile {
            calories: Some(266.0),
            protein_g: Some(11.0),
            sugar_g: Some(0.0),
            ..NutrientProfile::default()
        };
        label.fill_missing_from(&baseline);
        assert_eq!(label.calories, Some(300.0));
        assert_eq!(label.protein_g, Some(11.0));
        assert_eq!(label.sugar_g, Some(12.0));
        assert_eq!(label.fiber_g, None);
    }
}
