// ABOUTME: Category portion table mapping food-name keywords to typical serving medians
// ABOUTME: Ordered first-match-wins table with per-category caps, beverage densities and coarse defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use pierre_food_core::models::FoodCategory;
use regex::Regex;
use tracing::trace;

/// Typical serving for one keyword group
#[derive(Debug, Clone)]
pub struct CategoryPortion {
    /// Short label shown next to the estimate
    pub label: &'static str,
    /// Lowercase keywords; a trailing plural `s` is accepted
    pub keywords: &'static [&'static str],
    /// Median serving, in grams (or millilitres for beverages)
    pub median: f64,
    /// Hard upper bound on the estimate (g)
    pub cap_grams: f64,
    /// Grams per millilitre; 1.0 for items measured by weight
    pub density: f64,
}

impl CategoryPortion {
    const fn solid(
        label: &'static str,
        keywords: &'static [&'static str],
        median: f64,
        cap_grams: f64,
    ) -> Self {
        Self {
            label,
            keywords,
            median,
            cap_grams,
            density: 1.0,
        }
    }

    const fn liquid(
        label: &'static str,
        keywords: &'static [&'static str],
        median_ml: f64,
        cap_grams: f64,
        density: f64,
    ) -> Self {
        Self {
            label,
            keywords,
            median: median_ml,
            cap_grams,
            density,
        }
    }

    /// Estimated grams: `min(median * density, cap)`
    #[must_use]
    pub fn grams(&self) -> f64 {
        (self.median * self.density).min(self.cap_grams)
    }
}

/// Category table in priority order; specific phrases precede generic words
const CATEGORY_PORTIONS: &[CategoryPortion] = &[
    // Bars
    CategoryPortion::solid("protein bar", &["protein bar", "energy bar"], 60.0, 80.0),
    CategoryPortion::solid("granola bar", &["granola bar", "cereal bar", "snack bar"], 40.0, 50.0),
    CategoryPortion::solid("candy bar", &["candy bar", "chocolate bar"], 45.0, 60.0),
    // Breakfast
    CategoryPortion::solid("granola", &["granola", "muesli"], 55.0, 80.0),
    CategoryPortion::solid("cereal", &["cereal", "cornflakes", "flakes"], 40.0, 60.0),
    CategoryPortion::solid("yogurt", &["yogurt", "yoghurt", "skyr"], 170.0, 250.0),
    // Beverages (median in ml)
    CategoryPortion::liquid("soda", &["soda", "cola", "soft drink", "pop"], 355.0, 500.0, 1.04),
    CategoryPortion::liquid("juice", &["juice", "smoothie"], 240.0, 500.0, 1.05),
    CategoryPortion::liquid("milk", &["milk", "milkshake"], 240.0, 500.0, 1.03),
    CategoryPortion::liquid("coffee", &["coffee", "latte", "cappuccino", "tea"], 240.0, 500.0, 1.0),
    CategoryPortion::liquid("soup", &["soup", "broth", "stew"], 250.0, 400.0, 1.0),
    // Snacks
    CategoryPortion::solid("chips", &["chip", "crisp", "pretzel", "popcorn"], 28.0, 50.0),
    CategoryPortion::solid("cookies", &["cookie", "biscuit", "brownie"], 30.0, 60.0),
    CategoryPortion::solid("crackers", &["cracker", "rice cake"], 30.0, 40.0),
    CategoryPortion::solid("nuts", &["nut", "almond", "peanut", "cashew", "trail mix"], 30.0, 50.0),
    CategoryPortion::solid("candy", &["candy", "chocolate", "gummy", "gummies"], 40.0, 60.0),
    // Meals
    CategoryPortion::solid("pizza", &["pizza"], 107.0, 300.0),
    CategoryPortion::solid("sandwich", &["sandwich", "sub", "wrap", "burrito"], 200.0, 350.0),
    CategoryPortion::solid("burger", &["burger", "cheeseburger"], 220.0, 350.0),
    CategoryPortion::solid("salad", &["salad"], 150.0, 350.0),
    CategoryPortion::solid("pasta", &["pasta", "spaghetti", "noodle"], 140.0, 300.0),
    CategoryPortion::solid("rice", &["rice"], 158.0, 300.0),
    // Whole foods
    CategoryPortion::solid("fish", &["salmon", "tuna", "cod", "fish"], 140.0, 250.0),
    CategoryPortion::solid("meat", &["chicken", "steak", "beef", "pork", "turkey"], 140.0, 250.0),
    CategoryPortion::solid("egg", &["egg"], 50.0, 150.0),
    CategoryPortion::solid("fruit", &["apple", "banana", "orange", "pear"], 150.0, 250.0),
    CategoryPortion::solid("bread", &["bread", "toast", "bagel"], 40.0, 100.0),
    CategoryPortion::solid("sauce", &["sauce", "dressing", "ketchup", "mayo"], 15.0, 40.0),
];

/// Compiled keyword matchers, parallel to [`CATEGORY_PORTIONS`]
static CATEGORY_MATCHERS: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    CATEGORY_PORTIONS
        .iter()
        .map(|entry| {
            let alternatives = entry
                .keywords
                .iter()
                .map(|keyword| regex::escape(keyword))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"\b(?:{alternatives})s?\b")).ok()
        })
        .collect()
});

/// First category whose keyword occurs in the name as a whole word
#[must_use]
pub fn category_portion(name: &str) -> Option<&'static CategoryPortion> {
    let text = name.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    let entry = CATEGORY_PORTIONS
        .iter()
        .zip(CATEGORY_MATCHERS.iter())
        .find(|(_, matcher)| matcher.as_ref().is_some_and(|re| re.is_match(&text)))
        .map(|(entry, _)| entry)?;
    trace!(name = %text, category = entry.label, "Category portion table hit");
    Some(entry)
}

/// Default serving for a coarse category when nothing better is known (g)
#[must_use]
pub const fn coarse_category_default(category: FoodCategory) -> Option<f64> {
    match category {
        FoodCategory::Protein => Some(100.0),
        FoodCategory::Vegetable => Some(80.0),
        FoodCategory::Fruit => Some(120.0),
        FoodCategory::Grain => Some(55.0),
        FoodCategory::Dairy => Some(150.0),
        FoodCategory::FatOil => Some(14.0),
        FoodCategory::SauceCondiment => Some(15.0),
        FoodCategory::Beverage => Some(240.0),
        FoodCategory::Snack => Some(25.0),
        FoodCategory::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granola_bar_precedes_granola() {
        let entry = category_portion("Chewy Granola Bar").unwrap();
        assert_eq!(entry.label, "granola bar");
        assert!((entry.grams() - 40.0).abs() < f64::EPSILON);

        assert_eq!(category_portion("granola").unwrap().label, "granola");
    }

    #[test]
    fn test_beverages_apply_density_then_cap() {
        let soda = category_portion("diet cola").unwrap();
        assert!((soda.grams() - 369.2).abs() < 1e-9);
    }

    #[test]
    fn test_plural_and_word_boundaries() {
        assert_eq!(category_portion("salted almonds").unwrap().label, "nuts");
        // "submarine" is not the "sub" keyword
        assert_ne!(
            category_portion("submarine").map(|entry| entry.label),
            Some("sandwich")
        );
    }

    #[test]
    fn test_every_matcher_compiles() {
        assert_eq!(CATEGORY_MATCHERS.len(), CATEGORY_PORTIONS.len());
        assert!(CATEGORY_MATCHERS.iter().all(Option::is_some));
    }

    #[test]
    fn test_caps_never_below_one_gram() {
        assert!(CATEGORY_PORTIONS.iter().all(|entry| entry.grams() >= 1.0));
    }

    #[test]
    fn test_coarse_defaults() {
        assert_eq!(coarse_category_default(FoodCategory::Beverage), Some(240.0));
        assert_eq!(coarse_category_default(FoodCategory::Other), None);
    }
}
