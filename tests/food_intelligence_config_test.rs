// ABOUTME: Integration tests for food intelligence configuration loading
// ABOUTME: Validates defaults, environment overrides and rejection of inconsistent settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_food_pipeline::config::intelligence::FilterConfig;
use pierre_food_pipeline::intelligence::filter_candidates;
use pierre_food_pipeline::models::DetectionCandidate;
use pierre_food_pipeline::{ConfigError, FoodIntelligenceConfig};
use serial_test::serial;

const OVERRIDE_VARS: &[&str] = &[
    "FOOD_FILTER_CITRUS_GAP",
    "FOOD_RANKING_PROTEIN_BOOST",
    "FOOD_RANKING_SURVIVAL_THRESHOLD",
    "FOOD_RANKING_TOP_K",
    "FOOD_PORTION_FALLBACK_GRAMS",
    "FOOD_PORTION_RATIO_MIN_GRAMS",
    "FOOD_PORTION_RATIO_MAX_GRAMS",
    "FOOD_PORTION_DECLARED_MAX_GRAMS",
    "FOOD_SCORE_SUGAR_WEIGHT",
    "FOOD_SCORE_ULTRA_PROCESSED_PENALTY",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = FoodIntelligenceConfig::default();
    assert!(config.validate().is_ok());
    assert!((config.ranking.protein_boost - 0.15).abs() < f64::EPSILON);
    assert!((config.ranking.survival_threshold - 0.6).abs() < f64::EPSILON);
    assert_eq!(config.filter.exclusive_groups.len(), 1);
    assert!((config.portion.fallback.default_grams - 30.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let loaded = FoodIntelligenceConfig::load().unwrap();
    let defaults = FoodIntelligenceConfig::default();
    assert_eq!(loaded.ranking.default_top_k, defaults.ranking.default_top_k);
    assert!(
        (loaded.scoring.weights.sugar - defaults.scoring.weights.sugar).abs() < f64::EPSILON
    );
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_overrides();
    env::set_var("FOOD_RANKING_PROTEIN_BOOST", "0.2");
    env::set_var("FOOD_RANKING_TOP_K", "3");
    env::set_var("FOOD_FILTER_CITRUS_GAP", "0.1");
    env::set_var("FOOD_PORTION_FALLBACK_GRAMS", "25");

    let config = FoodIntelligenceConfig::load().unwrap();

    assert!((config.ranking.protein_boost - 0.2).abs() < 0.001);
    assert_eq!(config.ranking.default_top_k, 3);
    assert!((config.filter.exclusive_groups[0].max_confidence_gap - 0.1).abs() < 0.001);
    assert!((config.portion.fallback.default_grams - 25.0).abs() < 0.001);

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("FOOD_RANKING_TOP_K", "three");

    let result = FoodIntelligenceConfig::load();
    assert!(matches!(
        result,
        Err(ConfigError::Parse { name: "FOOD_RANKING_TOP_K", ref value }) if value == "three"
    ));

    clear_overrides();
}

#[test]
#[serial]
fn test_override_breaking_weights_is_rejected() {
    clear_overrides();
    env::set_var("FOOD_SCORE_SUGAR_WEIGHT", "0.6");

    let result = FoodIntelligenceConfig::load();
    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));

    clear_overrides();
}

#[test]
#[serial]
fn test_override_inverting_ratio_range_is_rejected() {
    clear_overrides();
    env::set_var("FOOD_PORTION_RATIO_MIN_GRAMS", "400");

    let result = FoodIntelligenceConfig::load();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));

    clear_overrides();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_reported() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_overrides();
    env::set_var("FOOD_PORTION_FALLBACK_GRAMS", OsStr::from_bytes(&[0x33, 0xff]));

    let result = FoodIntelligenceConfig::load();
    assert!(matches!(
        result,
        Err(ConfigError::EnvVar {
            name: "FOOD_PORTION_FALLBACK_GRAMS",
            ..
        })
    ));

    clear_overrides();
}

#[test]
fn test_mixed_case_group_members_still_collapse() {
    let json = r#"{"exclusive_groups":[{"name":"citrus","members":["Lemon","Lime"],"max_confidence_gap":0.2}]}"#;
    let filter: FilterConfig = serde_json::from_str(json).unwrap();
    let kept = filter_candidates(
        &[
            DetectionCandidate::new("lemon", 0.9),
            DetectionCandidate::new("lime", 0.85),
        ],
        &filter,
    );
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "lemon");
}

#[test]
fn test_config_serializes_with_sections() {
    let json = serde_json::to_value(FoodIntelligenceConfig::default()).unwrap();
    for section in ["filter", "ranking", "classification", "portion", "scoring"] {
        assert!(json.get(section).is_some(), "missing {section}");
    }
}
