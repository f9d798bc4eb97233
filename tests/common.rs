// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and common detector and nutrition fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_food_pipeline`

use std::env;
use std::sync::Once;

use pierre_food_pipeline::models::{DetectionCandidate, NutrientProfile, NutritionFacts};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        // Another test binary harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The dinner plate from the salmon/citrus scenario
pub fn salmon_plate() -> Vec<DetectionCandidate> {
    vec![
        DetectionCandidate::new("salmon", 0.55).with_category("protein"),
        DetectionCandidate::new("lemon", 0.8),
        DetectionCandidate::new("lime", 0.78),
        DetectionCandidate::new("asparagus", 0.9).with_category("vegetable"),
    ]
}

/// Per-100 g and per-serving calories only
pub fn calorie_facts(per_100g: f64, per_serving: f64) -> NutritionFacts {
    NutritionFacts::per_100g(NutrientProfile {
        calories: Some(per_100g),
        ..NutrientProfile::default()
    })
    .with_per_serving(NutrientProfile {
        calories: Some(per_serving),
        ..NutrientProfile::default()
    })
}

/// A typical chocolate granola bar label
pub fn granola_bar_facts() -> NutritionFacts {
    NutritionFacts {
        per_100g: NutrientProfile {
            calories: Some(450.0),
            protein_g: Some(7.5),
            carbs_g: Some(65.0),
            fat_g: Some(17.5),
            saturated_fat_g: Some(6.0),
            sugar_g: Some(30.0),
            fiber_g: Some(5.0),
            sodium_mg: Some(250.0),
        },
        per_serving: None,
        additive_count: None,
        ultra_processed: false,
    }
}
