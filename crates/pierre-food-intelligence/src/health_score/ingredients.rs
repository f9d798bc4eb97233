// ABOUTME: Ingredient-text heuristics feeding the health score
// ABOUTME: Counts distinct additives (E-numbers, colours, preservatives, sweeteners) and flags ultra-processed foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static E_NUMBER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: e330, E 150d, e-621
    Regex::new(r"\be[\s-]?(\d{3,4}[a-f]?)\b").ok()
});

static NAMED_ADDITIVE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        // Artificial colours
        r"\b(red\s?40|allura\s?red|yellow\s?5|tartrazine|yellow\s?6|sunset\s?yellow|",
        r"blue\s?1|blue\s?2|green\s?3|caramel\s?colou?r|",
        // Preservatives
        r"bha|bht|tbhq|sodium\s+benzoate|potassium\s+sorbate|sodium\s+nitrite|",
        // Sweeteners
        r"aspartame|acesulfame(?:\s*k|\s+potassium)?|sucralose|saccharin|",
        // Other industrial additives
        r"high\s+fructose\s+corn\s+syrup|hfcs|partially\s+hydrogenated|",
        r"artificial\s+flavou?rs?|monosodium\s+glutamate|msg|carrageenan)\b",
    ))
    .ok()
});

static ULTRA_PROCESSED_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Whole words only: "instant noodles" matches, "instantly" does not
    Regex::new(concat!(
        r"\b(?:sodas?|soft\s+drinks?|energy\s+drinks?|candy|candies|chips|crackers|",
        r"cookies|instant|frozen\s+meals?|packaged\s+snacks?)\b",
    ))
    .ok()
});

/// Count distinct additives mentioned in an ingredient list
///
/// Repeated mentions of the same additive count once. Spelling variants are
/// folded by dropping whitespace, so "Red 40" and "red40" are the same.
#[must_use]
pub fn count_additives(ingredients: &str) -> u32 {
    let text = ingredients.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();

    if let Some(pattern) = E_NUMBER_PATTERN.as_ref() {
        for captures in pattern.captures_iter(&text) {
            if let Some(code) = captures.get(1) {
                seen.insert(format!("e{}", code.as_str()));
            }
        }
    }

    if let Some(pattern) = NAMED_ADDITIVE_PATTERN.as_ref() {
        for found in pattern.find_iter(&text) {
            seen.insert(found.as_str().split_whitespace().collect());
        }
    }

    u32::try_from(seen.len()).unwrap_or(u32::MAX)
}

/// Whether a name or category label suggests an ultra-processed food
#[must_use]
pub fn looks_ultra_processed(name: &str, category: Option<&str>) -> bool {
    let Some(pattern) = ULTRA_PROCESSED_PATTERN.as_ref() else {
        return false;
    };
    pattern.is_match(&name.to_lowercase())
        || category.is_some_and(|label| pattern.is_match(&label.to_lowercase()))
}
