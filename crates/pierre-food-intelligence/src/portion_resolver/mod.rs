// ABOUTME: Portion resolver choosing a gram quantity through a strict trust-ordered waterfall
// ABOUTME: User, declared, nutrient-ratio, category, size-token and fallback strategies; never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Portion Resolver
//!
//! Strategies are tried in a fixed order and the first that yields a
//! plausible value wins:
//!
//! 1. User-set grams
//! 2. Declared serving (OCR text, then product database text or grams)
//! 3. Nutrient ratio: `round(per_serving / per_100g * 100)` for calories,
//!    then protein, then carbohydrates, each bounded to the ratio range
//! 4. Category median from the food name
//! 5. Size tokens in the name (then the portion hint)
//! 6. Coarse-category default, else the global default
//!
//! Every strategy is a standalone function so it can be tested on its own.
//! Missing data only lowers confidence; [`resolve_portion`] always returns.

pub mod categories;
pub mod serving_size;
pub mod size_tokens;

pub use categories::{category_portion, coarse_category_default, CategoryPortion};
pub use serving_size::{parse_serving_size, ParsedServing};
pub use size_tokens::{find_size_token, SizeToken, SizeTokenValue};

use pierre_food_core::models::{
    FoodCategory, NutrientProfile, NutritionFacts, PortionEstimate, PortionSource,
};
use tracing::{debug, trace};

use crate::config::intelligence::{
    DeclaredPortionConfig, EstimatedPortionConfig, FallbackPortionConfig, PortionConfig,
    RatioPortionConfig,
};

/// Everything known about an item when choosing its portion
#[derive(Debug, Clone, Copy, Default)]
pub struct PortionRequest<'a> {
    /// Food name used for category and size-token lookups
    pub name: &'a str,
    /// Coarse category, if known
    pub category: Option<FoodCategory>,
    /// Detector portion hint (e.g. "family size")
    pub portion_hint: Option<&'a str>,
    /// Grams chosen by the user
    pub user_grams: Option<f64>,
    /// Serving size text read from the label
    pub ocr_serving: Option<&'a str>,
    /// Serving size text from a product database
    pub db_serving: Option<&'a str>,
    /// Structured serving weight from a product database
    pub db_serving_grams: Option<f64>,
    /// Nutrition facts for ratio computation
    pub nutrition: Option<&'a NutritionFacts>,
}

impl<'a> PortionRequest<'a> {
    /// Request for a named item with no other data
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Set the coarse category
    #[must_use]
    pub const fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the detector portion hint
    #[must_use]
    pub const fn with_portion_hint(mut self, hint: &'a str) -> Self {
        self.portion_hint = Some(hint);
        self
    }

    /// Set a user override
    #[must_use]
    pub const fn with_user_grams(mut self, grams: f64) -> Self {
        self.user_grams = Some(grams);
        self
    }

    /// Set the label serving text
    #[must_use]
    pub const fn with_ocr_serving(mut self, serving: &'a str) -> Self {
        self.ocr_serving = Some(serving);
        self
    }

    /// Set the database serving text
    #[must_use]
    pub const fn with_db_serving(mut self, serving: &'a str) -> Self {
        self.db_serving = Some(serving);
        self
    }

    /// Set the database serving weight
    #[must_use]
    pub const fn with_db_serving_grams(mut self, grams: f64) -> Self {
        self.db_serving_grams = Some(grams);
        self
    }

    /// Attach nutrition facts
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: &'a NutritionFacts) -> Self {
        self.nutrition = Some(nutrition);
        self
    }
}

/// Resolve a portion through the full waterfall
#[must_use]
pub fn resolve_portion(request: &PortionRequest<'_>, config: &PortionConfig) -> PortionEstimate {
    let estimate = from_user(request, &config.declared)
        .or_else(|| from_declared(request, &config.declared, config.estimates.token_ml_density))
        .or_else(|| {
            request
                .nutrition
                .and_then(|facts| from_nutrient_ratio(facts, &config.ratio))
        })
        .or_else(|| from_category(request.name, &config.estimates))
        .or_else(|| from_size_tokens(request, &config.estimates, &config.fallback))
        .unwrap_or_else(|| fallback_portion(request.category, &config.fallback));

    debug!(
        name = request.name,
        grams = estimate.grams,
        source = %estimate.source,
        confidence = estimate.confidence,
        "Resolved portion"
    );
    estimate
}

/// User override, accepted within the declared bounds
#[must_use]
pub fn from_user(
    request: &PortionRequest<'_>,
    config: &DeclaredPortionConfig,
) -> Option<PortionEstimate> {
    let grams = request.user_grams?;
    if !within(grams, config.min_grams, config.max_grams) {
        trace!(grams, "User portion outside declared bounds");
        return None;
    }
    Some(PortionEstimate::new(
        grams.round(),
        PortionSource::UserSet,
        config.user_confidence,
    ))
}

/// Declared serving: OCR text first, then database text, then database grams
#[must_use]
pub fn from_declared(
    request: &PortionRequest<'_>,
    config: &DeclaredPortionConfig,
    ml_density: f64,
) -> Option<PortionEstimate> {
    let accept = |grams: f64| within(grams, config.min_grams, config.max_grams);

    if let Some(parsed) = request
        .ocr_serving
        .and_then(|text| parse_serving_size(text, ml_density))
        .filter(|parsed| accept(parsed.grams))
    {
        return Some(
            PortionEstimate::new(
                parsed.grams.round(),
                PortionSource::DeclaredOcr,
                config.ocr_confidence,
            )
            .with_detail(&format!("OCR \"{}\"", parsed.matched)),
        );
    }

    let db_grams = request
        .db_serving
        .and_then(|text| parse_serving_size(text, ml_density))
        .map(|parsed| parsed.grams)
        .filter(|grams| accept(*grams))
        .or_else(|| request.db_serving_grams.filter(|grams| accept(*grams)))?;

    Some(PortionEstimate::new(
        db_grams.round(),
        PortionSource::DeclaredDb,
        config.db_confidence,
    ))
}

/// Serving weight implied by per-100 g versus per-serving values
///
/// Tries calories, protein, then carbohydrates. A nutrient is skipped if
/// either value is missing or non-positive, or if the implied weight falls
/// outside the configured range.
#[must_use]
pub fn from_nutrient_ratio(
    facts: &NutritionFacts,
    config: &RatioPortionConfig,
) -> Option<PortionEstimate> {
    let per_serving = facts.per_serving.as_ref()?;
    let per_100g = &facts.per_100g;

    let attempts: [(&str, fn(&NutrientProfile) -> Option<f64>, f64); 3] = [
        ("calories", |p| p.calories, config.calories_confidence),
        ("protein", |p| p.protein_g, config.protein_confidence),
        ("carbs", |p| p.carbs_g, config.carbs_confidence),
    ];

    attempts.iter().find_map(|&(nutrient, field, confidence)| {
        let serving_value = field(per_serving).filter(|v| v.is_finite() && *v > 0.0)?;
        let reference_value = field(per_100g).filter(|v| v.is_finite() && *v > 0.0)?;
        let grams = (serving_value / reference_value * 100.0).round();
        if within(grams, config.min_grams, config.max_grams) {
            Some(
                PortionEstimate::new(grams, PortionSource::RatioComputed, confidence)
                    .with_detail(&format!("calc from {nutrient}")),
            )
        } else {
            trace!(nutrient, grams, "Ratio portion implausible, trying next nutrient");
            None
        }
    })
}

/// Category median for the food name
#[must_use]
pub fn from_category(name: &str, config: &EstimatedPortionConfig) -> Option<PortionEstimate> {
    let entry = category_portion(name)?;
    Some(
        PortionEstimate::new(
            entry.grams().round(),
            PortionSource::CategoryEstimate,
            config.category_confidence,
        )
        .with_detail(entry.label),
    )
}

/// Size token in the name, then in the portion hint
///
/// Multipliers scale the coarse-category default when a category is known,
/// otherwise the global default.
#[must_use]
pub fn from_size_tokens(
    request: &PortionRequest<'_>,
    config: &EstimatedPortionConfig,
    fallback: &FallbackPortionConfig,
) -> Option<PortionEstimate> {
    let token = find_size_token(request.name)
        .or_else(|| request.portion_hint.and_then(find_size_token))?;

    let grams = match token.value {
        SizeTokenValue::Grams(grams) => grams,
        SizeTokenValue::Millilitres(ml) => ml * config.token_ml_density,
        SizeTokenValue::Multiplier(factor) => {
            let base = request
                .category
                .and_then(coarse_category_default)
                .unwrap_or(fallback.default_grams);
            base * factor
        }
    };

    (grams.is_finite() && grams > 0.0).then(|| {
        PortionEstimate::new(
            grams.round(),
            PortionSource::TokenParsed,
            config.token_confidence,
        )
        .with_detail(token.token)
    })
}

/// Last resort: coarse-category default or the global default
#[must_use]
pub fn fallback_portion(
    category: Option<FoodCategory>,
    config: &FallbackPortionConfig,
) -> PortionEstimate {
    category.and_then(coarse_category_default).map_or_else(
        || {
            PortionEstimate::new(
                config.default_grams,
                PortionSource::FallbackDefault,
                config.default_confidence,
            )
        },
        |grams| {
            PortionEstimate::new(
                grams,
                PortionSource::FallbackDefault,
                config.category_confidence,
            )
        },
    )
}

/// Convert a per-100 g profile to a per-portion profile
///
/// Calories and sodium are rounded to whole numbers, everything else to one
/// decimal. Missing fields stay missing.
#[must_use]
pub fn scale_to_portion(per_100g: &NutrientProfile, grams: f64) -> NutrientProfile {
    let factor = grams / 100.0;
    let whole = |value: Option<f64>| value.map(|v| (v * factor).round());
    let tenth = |value: Option<f64>| value.map(|v| (v * factor * 10.0).round() / 10.0);

    NutrientProfile {
        calories: whole(per_100g.calories),
        protein_g: tenth(per_100g.protein_g),
        carbs_g: tenth(per_100g.carbs_g),
        fat_g: tenth(per_100g.fat_g),
        saturated_fat_g: tenth(per_100g.saturated_fat_g),
        sugar_g: tenth(per_100g.sugar_g),
        fiber_g: tenth(per_100g.fiber_g),
        sodium_mg: whole(per_100g.sodium_mg),
    }
}

fn within(grams: f64, min: f64, max: f64) -> bool {
    grams.is_finite() && (min..=max).contains(&grams)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calories_facts(per_100g: f64, per_serving: f64) -> NutritionFacts {
        NutritionFacts::per_100g(NutrientProfile {
            calories: Some(per_100g),
            ..NutrientProfile::default()
        })
        .with_per_serving(NutrientProfile {
            calories: Some(per_serving),
            ..NutrientProfile::default()
        })
    }

    #[test]
    fn test_ratio_from_calories() {
        let facts = calories_facts(500.0, 150.0);
        let estimate = resolve_portion(
            &PortionRequest::new("mystery snack").with_nutrition(&facts),
            &PortionConfig::default(),
        );
        assert!((estimate.grams - 30.0).abs() < f64::EPSILON);
        assert_eq!(estimate.source, PortionSource::RatioComputed);
        assert!((estimate.confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_falls_through_to_protein() {
        // Calories imply 2 g (implausible); protein implies 50 g
        let facts = NutritionFacts::per_100g(NutrientProfile {
            calories: Some(500.0),
            protein_g: Some(20.0),
            ..NutrientProfile::default()
        })
        .with_per_serving(NutrientProfile {
            calories: Some(10.0),
            protein_g: Some(10.0),
            ..NutrientProfile::default()
        });
        let estimate = from_nutrient_ratio(&facts, &RatioPortionConfig::default()).unwrap();
        assert!((estimate.grams - 50.0).abs() < f64::EPSILON);
        assert!((estimate.confidence - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fat_is_not_a_ratio_source() {
        let facts = NutritionFacts::per_100g(NutrientProfile {
            fat_g: Some(10.0),
            ..NutrientProfile::default()
        })
        .with_per_serving(NutrientProfile {
            fat_g: Some(5.0),
            ..NutrientProfile::default()
        });
        assert!(from_nutrient_ratio(&facts, &RatioPortionConfig::default()).is_none());
    }

    #[test]
    fn test_zero_reference_value_skipped() {
        let facts = calories_facts(0.0, 150.0);
        assert!(from_nutrient_ratio(&facts, &RatioPortionConfig::default()).is_none());
    }

    #[test]
    fn test_user_beats_declared() {
        let estimate = resolve_portion(
            &PortionRequest::new("granola bar")
                .with_user_grams(55.0)
                .with_ocr_serving("1 bar (40 g)"),
            &PortionConfig::default(),
        );
        assert_eq!(estimate.source, PortionSource::UserSet);
        assert!((estimate.grams - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ocr_beats_db() {
        let estimate = resolve_portion(
            &PortionRequest::new("granola bar")
                .with_ocr_serving("Serving size 1 bar (42g)")
                .with_db_serving_grams(40.0),
            &PortionConfig::default(),
        );
        assert_eq!(estimate.source, PortionSource::DeclaredOcr);
        assert!((estimate.grams - 42.0).abs() < f64::EPSILON);
        assert_eq!(estimate.label.as_deref(), Some("42g · OCR \"42g\""));
    }

    #[test]
    fn test_implausible_declared_value_skipped() {
        let estimate = resolve_portion(
            &PortionRequest::new("granola bar")
                .with_ocr_serving("2 kg")
                .with_db_serving("see package"),
            &PortionConfig::default(),
        );
        assert_eq!(estimate.source, PortionSource::CategoryEstimate);
        assert!((estimate.grams - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_size_token_multiplies_category_default() {
        let estimate = resolve_portion(
            &PortionRequest::new("family size lasagna").with_category(FoodCategory::Grain),
            &PortionConfig::default(),
        );
        assert_eq!(estimate.source, PortionSource::TokenParsed);
        assert!((estimate.grams - 165.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_size_token_from_portion_hint() {
        let estimate = resolve_portion(
            &PortionRequest::new("mystery bake").with_portion_hint("mini"),
            &PortionConfig::default(),
        );
        assert_eq!(estimate.source, PortionSource::TokenParsed);
        assert!((estimate.grams - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fallbacks() {
        let config = PortionConfig::default();
        let global = resolve_portion(&PortionRequest::new("zzz"), &config);
        assert_eq!(global.source, PortionSource::FallbackDefault);
        assert!((global.grams - 30.0).abs() < f64::EPSILON);
        assert!((global.confidence - 0.1).abs() < f64::EPSILON);

        let by_category = resolve_portion(
            &PortionRequest::new("zzz").with_category(FoodCategory::Dairy),
            &config,
        );
        assert!((by_category.grams - 150.0).abs() < f64::EPSILON);
        assert!(by_category.confidence > global.confidence);
    }

    #[test]
    fn test_scale_to_portion_rounding() {
        let per_100g = NutrientProfile {
            calories: Some(389.0),
            protein_g: Some(16.9),
            sodium_mg: Some(6.0),
            ..NutrientProfile::default()
        };
        let scaled = scale_to_portion(&per_100g, 40.0);
        assert_eq!(scaled.calories, Some(156.0));
        assert_eq!(scaled.protein_g, Some(6.8));
        assert_eq!(scaled.sodium_mg, Some(2.0));
        assert_eq!(scaled.fat_g, None);
    }
}
