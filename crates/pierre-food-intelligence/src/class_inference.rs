// ABOUTME: Canonical class inference that maps free-text food names to generic macro baselines
// ABOUTME: Ordered first-match-wins regex cascade plus a fixed per-100 g macro reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Class Inference Fallback
//!
//! When no enrichment or product match exists, a food name is matched against
//! an ordered list of canonical classes. Classes are tried in declaration
//! order and, within a class, patterns are tried in order; the first hit wins.
//! Patterns anchored with `\b` score higher than plain substring patterns.
//!
//! A matched class id keys into a fixed macro table returning per-100 g
//! calories, protein, carbohydrates and fat.

use std::sync::LazyLock;

use pierre_food_core::models::{
    ClassificationResult, GenericFoodRecord, GenericMacroRecord, NutrientProfile,
};
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::config::intelligence::ClassificationConfig;

/// Canonical classes in priority order with their raw patterns
///
/// More specific dishes precede their ingredients: "salmon teriyaki bowl" is a
/// teriyaki bowl, "chicken noodle soup" is soup.
const CLASS_PATTERNS: &[(&str, &[&str])] = &[
    (
        "hot_dog_link",
        &[r"\bhot ?dogs?\b", r"\bfrankfurters?\b", r"\bwieners?\b", "bratwurst"],
    ),
    ("pizza_slice", &[r"\bpizzas?\b", r"\bpepperoni\b", "margherita"]),
    (
        "california_roll",
        &[r"\bcalifornia rolls?\b", r"\bsushi\b", "maki"],
    ),
    (
        "teriyaki_bowl",
        &[r"\bteriyaki\b", r"\bpoke bowl\b", "rice bowl"],
    ),
    ("soup_bowl", &[r"\bsoups?\b", r"\bbroth\b", r"\bstew\b", "chowder"]),
    (
        "fish_fillet_link",
        &[
            r"\bsalmon\b",
            r"\b(?:cod|tilapia|trout|halibut|haddock|fish)\b",
            "seafood",
        ],
    ),
    (
        "chicken_breast",
        &[r"\bchicken breasts?\b", r"\bchicken\b", "poultry"],
    ),
    ("egg_large", &[r"\beggs?\b", r"\bomelet(?:te)?\b", "scrambled"]),
    ("oatmeal_cooked", &[r"\boatmeal\b", r"\bporridge\b", "oats"]),
    ("rice_cooked", &[r"\brice\b", "risotto", "pilaf"]),
];

/// Display name and per-100 g macros for one class
struct GenericClassEntry {
    class_id: &'static str,
    display_name: &'static str,
    macros: GenericMacroRecord,
}

impl GenericClassEntry {
    const fn new(
        class_id: &'static str,
        display_name: &'static str,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            class_id,
            display_name,
            macros: GenericMacroRecord {
                calories,
                protein,
                carbs,
                fat,
            },
        }
    }
}

/// Generic macro reference table (per 100 g)
const GENERIC_MACROS: &[GenericClassEntry] = &[
    GenericClassEntry::new("hot_dog_link", "Hot dog", 290.0, 10.0, 2.0, 26.0),
    GenericClassEntry::new("pizza_slice", "Pizza slice", 266.0, 11.0, 33.0, 10.0),
    GenericClassEntry::new("california_roll", "California roll", 129.0, 4.0, 18.0, 6.0),
    GenericClassEntry::new("teriyaki_bowl", "Teriyaki bowl", 163.0, 12.0, 21.0, 4.0),
    GenericClassEntry::new("soup_bowl", "Soup", 36.0, 2.6, 4.3, 1.2),
    GenericClassEntry::new("fish_fillet_link", "Fish fillet", 206.0, 22.0, 0.0, 12.0),
    GenericClassEntry::new("chicken_breast", "Chicken breast", 165.0, 31.0, 0.0, 3.6),
    GenericClassEntry::new("egg_large", "Egg", 155.0, 13.0, 1.1, 11.0),
    GenericClassEntry::new("oatmeal_cooked", "Oatmeal", 68.0, 2.4, 12.0, 1.4),
    GenericClassEntry::new("rice_cooked", "Cooked rice", 130.0, 2.7, 28.0, 0.3),
];

/// A compiled pattern; `None` if the source failed to compile
struct ClassPattern {
    source: &'static str,
    regex: Option<Regex>,
    anchored: bool,
}

/// Compiled cascade, built once on first use
static COMPILED_CLASSES: LazyLock<Vec<(&'static str, Vec<ClassPattern>)>> =
    LazyLock::new(|| {
        CLASS_PATTERNS
            .iter()
            .map(|(class_id, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|&source| ClassPattern {
                        source,
                        regex: compile_pattern(class_id, source),
                        anchored: source.contains(r"\b"),
                    })
                    .collect();
                (*class_id, compiled)
            })
            .collect()
    });

fn compile_pattern(class_id: &str, source: &str) -> Option<Regex> {
    Regex::new(source)
        .map_err(|e| {
            warn!(class_id, pattern = source, error = %e, "Class pattern failed to compile");
        })
        .ok()
}

/// Match free text against the canonical class cascade
///
/// Returns [`ClassificationResult::unmatched`] when nothing matches; that is
/// an expected outcome, not an error.
#[must_use]
pub fn classify_food(name: &str, config: &ClassificationConfig) -> ClassificationResult {
    let text = name.trim().to_lowercase();
    if text.is_empty() {
        return ClassificationResult::unmatched();
    }

    for (class_id, patterns) in COMPILED_CLASSES.iter() {
        let hit = patterns.iter().find(|pattern| {
            pattern
                .regex
                .as_ref()
                .is_some_and(|regex| regex.is_match(&text))
        });
        if let Some(pattern) = hit {
            let confidence = if pattern.anchored {
                config.anchored_confidence
            } else {
                config.substring_confidence
            };
            debug!(
                name = %text,
                class_id,
                pattern = pattern.source,
                confidence,
                "Classified food name"
            );
            return ClassificationResult {
                class_id: Some((*class_id).to_owned()),
                confidence,
                matched_pattern: Some(pattern.source.to_owned()),
            };
        }
    }

    trace!(name = %text, "No canonical class matched");
    ClassificationResult::unmatched()
}

/// Per-100 g reference macros for a class id
#[must_use]
pub fn generic_macros(class_id: &str) -> Option<GenericMacroRecord> {
    find_entry(class_id).map(|entry| entry.macros)
}

/// Build a generic nutrition record for a class id
///
/// Fiber, sugar and sodium are zero-filled. Returns `None` for class ids with
/// no table entry rather than inventing data.
#[must_use]
pub fn generic_fallback(class_id: &str, name_override: Option<&str>) -> Option<GenericFoodRecord> {
    let entry = find_entry(class_id)?;
    let macros = entry.macros;
    let name = name_override
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(entry.display_name);

    Some(GenericFoodRecord {
        class_id: entry.class_id.to_owned(),
        name: name.to_owned(),
        per_100g: NutrientProfile {
            calories: Some(macros.calories),
            protein_g: Some(macros.protein),
            carbs_g: Some(macros.carbs),
            fat_g: Some(macros.fat),
            saturated_fat_g: None,
            sugar_g: Some(0.0),
            fiber_g: Some(0.0),
            sodium_mg: Some(0.0),
        },
        calories: macros.calories,
        protein: macros.protein,
        carbs: macros.carbs,
        fat: macros.fat,
        is_estimated: true,
    })
}

fn find_entry(class_id: &str) -> Option<&'static GenericClassEntry> {
    GENERIC_MACROS.iter().find(|entry| entry.class_id == class_id)
}
