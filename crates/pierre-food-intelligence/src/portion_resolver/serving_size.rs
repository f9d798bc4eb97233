// ABOUTME: Declared serving-size string parsing for label and product database values
// ABOUTME: Converts strings like "1 bar (40 g)", "250 ml" or "2 cookies" into grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use pierre_food_core::constants::units::{GRAMS_PER_KG, GRAMS_PER_OZ, ML_PER_FL_OZ, ML_PER_LITRE};
use regex::{Captures, Regex};

/// A declared serving converted to grams
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedServing {
    /// Serving weight in grams
    pub grams: f64,
    /// The fragment of text the value came from
    pub matched: String,
}

static GRAMS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 30g, 40 g, 28.5 grams, 30 gr, 1,000 g
    Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?)\s*(?:grams?|gr|g)\b").ok()
});

static KILOGRAMS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1kg, 0.5 kilograms
    Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?)\s*(?:kilograms?|kg)\b").ok()
});

static FLUID_OUNCES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 12 fl oz, 8 fl. oz, 16 fluid ounces
    Regex::new(
        r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?)\s*(?:fl\.?\s*oz|fluid\s+ounces?)\b",
    )
    .ok()
});

static MILLILITRES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 250ml, 330 mL, 100 millilitres
    Regex::new(
        r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?)\s*(?:ml|millilit(?:er|re)s?)\b",
    )
    .ok()
});

static LITRES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1 l, 1.5 litres, 2 liters
    Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?)\s*(?:lit(?:er|re)s?|l)\b").ok()
});

static OUNCES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1.5 oz, 2 ounces
    Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?)\s*(?:oz|ounces?)\b").ok()
});

static THOUSANDS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+(?:\.\d+)?$").ok());

static UNIT_WORD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2 cookies, 1/2 cup, a bar, one serving, bottle
    Regex::new(
        r"(?:\b(\d+/\d+|\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:[.,]\d+)?|an?|one)\s*)?\b(bar|piece|cookie|cracker|cup|bottle|can|serving|portion|pack|sachet)s?\b",
    )
    .ok()
});

/// Typical weight of one counted unit (g)
const UNIT_WEIGHTS: &[(&str, f64)] = &[
    ("bar", 40.0),
    ("piece", 25.0),
    ("cookie", 30.0),
    ("cracker", 10.0),
    ("cup", 240.0),
    ("bottle", 500.0),
    ("can", 355.0),
    ("serving", 30.0),
    ("portion", 30.0),
    ("pack", 25.0),
    ("sachet", 15.0),
];

/// Parse a declared serving string into grams
///
/// Explicit masses win over volumes, which win over counted units, so
/// `"1 bar (40 g)"` yields 40 g rather than the generic bar weight. Volumes
/// are converted with `ml_density` (g/ml). Returns `None` when nothing
/// parses to a positive finite weight.
#[must_use]
pub fn parse_serving_size(text: &str, ml_density: f64) -> Option<ParsedServing> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    let conversions: [(Option<&Regex>, f64); 6] = [
        (GRAMS_PATTERN.as_ref(), 1.0),
        (KILOGRAMS_PATTERN.as_ref(), GRAMS_PER_KG),
        (FLUID_OUNCES_PATTERN.as_ref(), ML_PER_FL_OZ * ml_density),
        (MILLILITRES_PATTERN.as_ref(), ml_density),
        (LITRES_PATTERN.as_ref(), ML_PER_LITRE * ml_density),
        (OUNCES_PATTERN.as_ref(), GRAMS_PER_OZ),
    ];

    conversions
        .iter()
        .find_map(|&(pattern, grams_per_unit)| {
            let captures = pattern?.captures(&text)?;
            let amount = parse_quantity(captures.get(1)?.as_str())?;
            positive(amount * grams_per_unit, &captures)
        })
        .or_else(|| parse_unit_word(&text))
}

fn parse_unit_word(text: &str) -> Option<ParsedServing> {
    let captures = UNIT_WORD_PATTERN.as_ref()?.captures(text)?;
    let quantity = captures
        .get(1)
        .map_or(Some(1.0), |m| parse_quantity(m.as_str()))?;
    let unit = captures.get(2)?.as_str();
    let (_, unit_grams) = UNIT_WEIGHTS.iter().find(|(name, _)| *name == unit)?;
    positive(quantity * unit_grams, &captures)
}

fn positive(grams: f64, captures: &Captures<'_>) -> Option<ParsedServing> {
    (grams.is_finite() && grams > 0.0).then(|| ParsedServing {
        grams,
        matched: captures
            .get(0)
            .map(|m| m.as_str().trim().to_owned())
            .unwrap_or_default(),
    })
}

/// Parse "2", "1.5", "1,5", "1,000", "1/2", "a", "an" or "one"
fn parse_quantity(raw: &str) -> Option<f64> {
    match raw {
        "a" | "an" | "one" => Some(1.0),
        _ => raw.split_once('/').map_or_else(
            || parse_decimal(raw),
            |(numerator, denominator)| {
                let numerator: f64 = numerator.parse().ok()?;
                let denominator: f64 = denominator.parse().ok()?;
                (denominator > 0.0).then_some(numerator / denominator)
            },
        ),
    }
}

/// A comma groups thousands in "1,000" and marks decimals in "1,5"
fn parse_decimal(raw: &str) -> Option<f64> {
    let grouped = THOUSANDS_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(raw));
    let normalized = if grouped {
        raw.replace(',', "")
    } else {
        raw.replace(',', ".")
    };
    normalized.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(text: &str) -> Option<f64> {
        parse_serving_size(text, 1.0).map(|parsed| parsed.grams)
    }

    #[test]
    fn test_explicit_grams() {
        assert_eq!(grams("30g"), Some(30.0));
        assert_eq!(grams("Serving size 28.5 grams"), Some(28.5));
        assert_eq!(grams("1 bar (40 g)"), Some(40.0));
        assert_eq!(grams("1,5 kg"), Some(1500.0));
    }

    #[test]
    fn test_thousands_separator_is_not_a_decimal() {
        assert_eq!(grams("1,000 g"), Some(1000.0));
        assert_eq!(grams("Net wt 1,250.5 grams"), Some(1250.5));
        assert_eq!(grams("2,500 ml"), Some(2500.0));
        assert_eq!(grams("1,5 g"), Some(1.5));
        assert_eq!(grams("0,25 l"), Some(250.0));
    }

    #[test]
    fn test_volumes_use_density() {
        assert_eq!(grams("250 ml"), Some(250.0));
        assert_eq!(
            parse_serving_size("100 mL", 1.03).map(|p| p.grams),
            Some(103.0)
        );
        let fl_oz = grams("12 fl oz").unwrap();
        assert!((fl_oz - 354.84).abs() < 0.01);
        assert_eq!(grams("1.5 litres"), Some(1500.0));
    }

    #[test]
    fn test_ounces() {
        let oz = grams("1.5 oz").unwrap();
        assert!((oz - 42.525).abs() < 1e-9);
    }

    #[test]
    fn test_unit_words_with_quantities() {
        assert_eq!(grams("2 cookies"), Some(60.0));
        assert_eq!(grams("1/2 cup"), Some(120.0));
        assert_eq!(grams("a bar"), Some(40.0));
        assert_eq!(grams("bottle"), Some(500.0));
    }

    #[test]
    fn test_matched_fragment_is_reported() {
        let parsed = parse_serving_size("Serving Size: 1 bar (40g)", 1.0).unwrap();
        assert_eq!(parsed.matched, "40g");
    }

    #[test]
    fn test_unparseable_strings() {
        assert_eq!(grams(""), None);
        assert_eq!(grams("see package"), None);
        assert_eq!(grams("0 g"), None);
        assert_eq!(grams("1/0 cup"), None);
    }
}
