// ABOUTME: Food signal pipeline chaining filter, ranker, class inference, portion and score stages
// ABOUTME: Returns the constituent parts per item for callers to assemble their own records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Signal Pipeline
//!
//! Stages run in a fixed order per item:
//!
//! ```text
//! detections -> filter -> rank -> (no enrichment? class inference -> generic macros)
//!            -> portion -> score
//! ```
//!
//! The pipeline owns no state besides its configuration and never fails. It
//! returns [`AnalyzedItem`] parts; merging them into a stored record is left
//! to the caller.

use pierre_food_core::models::{
    ClassificationResult, DetectionCandidate, FoodCategory, GenericFoodRecord, HealthScoreResult,
    NutritionFacts, PortionEstimate, RankedCandidate,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidate_filter::filter_candidates;
use crate::candidate_ranker::rank_candidates;
use crate::class_inference::{classify_food, generic_fallback};
use crate::config::intelligence::FoodIntelligenceConfig;
use crate::health_score::{calculate_health_score, count_additives, looks_ultra_processed};
use crate::portion_resolver::{resolve_portion, scale_to_portion, PortionRequest};

/// External data available for one food item
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemInput<'a> {
    /// Food name
    pub name: &'a str,
    /// Category label from the detector or product database
    pub category: Option<&'a str>,
    /// Detector portion hint
    pub portion_hint: Option<&'a str>,
    /// Enrichment or product nutrition, if a lookup succeeded
    pub nutrition: Option<&'a NutritionFacts>,
    /// Ingredient list text
    pub ingredients: Option<&'a str>,
    /// Grams chosen by the user
    pub user_grams: Option<f64>,
    /// Serving size text read from the label
    pub ocr_serving: Option<&'a str>,
    /// Serving size text from a product database
    pub db_serving: Option<&'a str>,
    /// Structured serving weight from a product database
    pub db_serving_grams: Option<f64>,
}

impl<'a> ItemInput<'a> {
    /// Input for a bare food name
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Input carrying a detection's name, category and portion hint
    #[must_use]
    pub fn from_candidate(candidate: &'a DetectionCandidate) -> Self {
        Self {
            name: &candidate.name,
            category: candidate.category.as_deref(),
            portion_hint: candidate.portion_hint.as_deref(),
            ..Self::default()
        }
    }

    /// Attach a category label
    #[must_use]
    pub const fn with_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach enrichment nutrition
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: &'a NutritionFacts) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Attach ingredient text
    #[must_use]
    pub const fn with_ingredients(mut self, ingredients: &'a str) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    /// Attach a user portion override
    #[must_use]
    pub const fn with_user_grams(mut self, grams: f64) -> Self {
        self.user_grams = Some(grams);
        self
    }

    /// Attach the label serving text
    #[must_use]
    pub const fn with_ocr_serving(mut self, serving: &'a str) -> Self {
        self.ocr_serving = Some(serving);
        self
    }

    /// Attach the database serving text
    #[must_use]
    pub const fn with_db_serving(mut self, serving: &'a str) -> Self {
        self.db_serving = Some(serving);
        self
    }

    /// Attach the database serving weight
    #[must_use]
    pub const fn with_db_serving_grams(mut self, grams: f64) -> Self {
        self.db_serving_grams = Some(grams);
        self
    }
}

/// Per-item pipeline output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedItem {
    /// Item name as supplied
    pub name: String,
    /// Class inference outcome; absent when enrichment nutrition was supplied
    pub classification: Option<ClassificationResult>,
    /// Generic baseline used in place of enrichment
    pub generic: Option<GenericFoodRecord>,
    /// Nutrition actually scored, including derived per-serving values
    pub nutrition: NutritionFacts,
    /// Chosen portion
    pub portion: PortionEstimate,
    /// Health score
    pub score: HealthScoreResult,
}

/// Output for a whole detector frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlateAnalysis {
    /// Filtered and ranked candidates
    pub candidates: Vec<RankedCandidate>,
    /// One analysis per ranked candidate, same order
    pub items: Vec<AnalyzedItem>,
}

/// Stateless orchestrator over the five stages
#[derive(Debug, Clone, Default)]
pub struct FoodSignalPipeline {
    config: FoodIntelligenceConfig,
}

impl FoodSignalPipeline {
    /// Pipeline with an explicit configuration
    #[must_use]
    pub const fn new(config: FoodIntelligenceConfig) -> Self {
        Self { config }
    }

    /// Pipeline using the environment-driven global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(FoodIntelligenceConfig::global().clone())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FoodIntelligenceConfig {
        &self.config
    }

    /// Filter then rank raw detections
    #[must_use]
    pub fn select_candidates(
        &self,
        candidates: &[DetectionCandidate],
        top_k: Option<usize>,
    ) -> Vec<RankedCandidate> {
        let filtered = filter_candidates(candidates, &self.config.filter);
        rank_candidates(&filtered, top_k, &self.config.ranking)
    }

    /// Classify, portion and score one item
    #[must_use]
    pub fn analyze_item(&self, input: &ItemInput<'_>) -> AnalyzedItem {
        let enrichment = input
            .nutrition
            .filter(|facts| !facts.per_100g.is_empty());

        let (classification, generic, mut nutrition) = enrichment.map_or_else(
            || self.generic_baseline(input),
            |facts| (None, None, facts.clone()),
        );

        if nutrition.additive_count.is_none() {
            nutrition.additive_count = input.ingredients.map(count_additives);
        }
        nutrition.ultra_processed |= looks_ultra_processed(input.name, input.category);

        let mut request = PortionRequest::new(input.name).with_nutrition(&nutrition);
        request.category = input.category.map(FoodCategory::from_str_lossy);
        request.portion_hint = input.portion_hint;
        request.user_grams = input.user_grams;
        request.ocr_serving = input.ocr_serving;
        request.db_serving = input.db_serving;
        request.db_serving_grams = input.db_serving_grams;
        let portion = resolve_portion(&request, &self.config.portion);

        if nutrition.per_serving.is_none() && !nutrition.per_100g.is_empty() {
            nutrition.per_serving = Some(scale_to_portion(&nutrition.per_100g, portion.grams));
        }

        let score = calculate_health_score(&nutrition, &self.config.scoring);

        debug!(
            name = input.name,
            class_id = classification
                .as_ref()
                .and_then(|c| c.class_id.as_deref())
                .unwrap_or("-"),
            grams = portion.grams,
            score = score.final_score,
            "Analyzed food item"
        );

        AnalyzedItem {
            name: input.name.to_owned(),
            classification,
            generic,
            nutrition,
            portion,
            score,
        }
    }

    /// Class inference and generic macros for items without a per-100 g profile
    fn generic_baseline(
        &self,
        input: &ItemInput<'_>,
    ) -> (
        Option<ClassificationResult>,
        Option<GenericFoodRecord>,
        NutritionFacts,
    ) {
        let classification = classify_food(input.name, &self.config.classification);
        let generic = classification
            .class_id
            .as_deref()
            .and_then(|class_id| generic_fallback(class_id, Some(input.name)));
        // The class baseline only fills per-100 g gaps in the caller's facts
        let mut nutrition = input.nutrition.cloned().unwrap_or_default();
        if let Some(record) = &generic {
            nutrition.per_100g.fill_missing_from(&record.per_100g);
        }
        (Some(classification), generic, nutrition)
    }

    /// Select candidates from a detector frame and analyze each one
    #[must_use]
    pub fn analyze_plate(
        &self,
        candidates: &[DetectionCandidate],
        top_k: Option<usize>,
    ) -> PlateAnalysis {
        let ranked = self.select_candidates(candidates, top_k);
        let items = ranked
            .iter()
            .map(|candidate| self.analyze_item(&ItemInput::from_candidate(&candidate.candidate)))
            .collect();
        PlateAnalysis {
            candidates: ranked,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_food_core::models::{NutrientProfile, PortionSource};

    #[test]
    fn test_enrichment_skips_class_inference() {
        let facts = NutritionFacts::per_100g(NutrientProfile {
            calories: Some(500.0),
            ..NutrientProfile::default()
        })
        .with_per_serving(NutrientProfile {
            calories: Some(150.0),
            ..NutrientProfile::default()
        });
        let pipeline = FoodSignalPipeline::default();
        let item = pipeline.analyze_item(&ItemInput::new("salmon crackers").with_nutrition(&facts));
        assert!(item.classification.is_none());
        assert_eq!(item.portion.source, PortionSource::RatioComputed);
        assert!(item.nutrition.ultra_processed);
    }

    #[test]
    fn test_generic_fallback_gets_per_serving() {
        let pipeline = FoodSignalPipeline::default();
        let item = pipeline.analyze_item(&ItemInput::new("grilled salmon fillet"));
        let classification = item.classification.unwrap();
        assert_eq!(classification.class_id.as_deref(), Some("fish_fillet_link"));
        assert_eq!(item.generic.unwrap().name, "grilled salmon fillet");
        assert_eq!(item.portion.source, PortionSource::CategoryEstimate);
        assert_eq!(item.nutrition.per_serving.unwrap().calories, Some(288.0));
    }

    #[test]
    fn test_generic_baseline_keeps_caller_label_data() {
        let facts = NutritionFacts {
            per_100g: NutrientProfile::default(),
            per_serving: Some(NutrientProfile {
                calories: Some(600.0),
                ..NutrientProfile::default()
            }),
            additive_count: Some(12),
            ultra_processed: true,
        };
        let pipeline = FoodSignalPipeline::default();
        let item = pipeline.analyze_item(&ItemInput::new("pepperoni pizza").with_nutrition(&facts));

        assert_eq!(
            item.classification.unwrap().class_id.as_deref(),
            Some("pizza_slice")
        );
        assert_eq!(item.nutrition.per_100g.calories, Some(266.0));
        assert_eq!(item.nutrition.per_serving.unwrap().calories, Some(600.0));
        assert_eq!(item.nutrition.additive_count, Some(12));
        assert!(item.nutrition.ultra_processed);
        // 600 / 266 * 100 against the generic per-100 g calories
        assert_eq!(item.portion.source, PortionSource::RatioComputed);
        assert!((item.portion.grams - 226.0).abs() < f64::EPSILON);
        // calories 5 + additives 4 + ultra-processed 10, protein bonus 0.55
        assert_eq!(item.score.final_score, 82);
    }

    #[test]
    fn test_unknown_item_still_scored() {
        let pipeline = FoodSignalPipeline::default();
        let item = pipeline.analyze_item(&ItemInput::new("zzz"));
        assert!(!item.classification.unwrap().is_match());
        assert!(item.generic.is_none());
        assert_eq!(item.portion.source, PortionSource::FallbackDefault);
        assert_eq!(item.score.final_score, 100);
    }

    #[test]
    fn test_ingredients_feed_additive_count() {
        let pipeline = FoodSignalPipeline::default();
        let item = pipeline
            .analyze_item(&ItemInput::new("zzz").with_ingredients("water, aspartame, e330"));
        assert_eq!(item.nutrition.additive_count, Some(2));
    }
}
