// ABOUTME: Benchmark fixtures for generating realistic detector frames and nutrition labels
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic food signal data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use pierre_food_pipeline::models::{DetectionCandidate, NutrientProfile, NutritionFacts};

/// Predefined frame sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum FrameSize {
    /// Small frame (5 detections) - a single plate
    Small,
    /// Medium frame (25 detections) - a buffet photo
    Medium,
    /// Large frame (200 detections) - a noisy detector batch
    Large,
}

impl FrameSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 5,
            Self::Medium => 25,
            Self::Large => 200,
        }
    }
}

/// Detector labels cycled through when generating frames
const FOOD_NAMES: &[(&str, Option<&str>)] = &[
    ("salmon", Some("protein")),
    ("lemon", Some("fruit")),
    ("lime", Some("fruit")),
    ("asparagus", Some("vegetable")),
    ("rice", Some("grain")),
    ("chicken breast", Some("protein")),
    ("granola bar", Some("snack")),
    ("tomato soup", None),
    ("pepperoni pizza", None),
    ("venti latte", Some("beverage")),
    ("family size lasagna", Some("grain")),
];

/// Generate a deterministic detector frame
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_frame(size: FrameSize) -> Vec<DetectionCandidate> {
    (0..size.count())
        .map(|index| {
            let (name, category) = FOOD_NAMES[index % FOOD_NAMES.len()];
            let confidence = 0.35 + ((index * 37) % 60) as f64 / 100.0;
            let mut candidate = DetectionCandidate::new(name, confidence);
            candidate.category = category.map(str::to_owned);
            candidate
        })
        .collect()
}

/// Nutrition label with both per-100 g and per-serving panels
#[must_use]
pub fn labelled_snack() -> NutritionFacts {
    NutritionFacts::per_100g(NutrientProfile {
        calories: Some(450.0),
        protein_g: Some(7.5),
        carbs_g: Some(65.0),
        fat_g: Some(17.5),
        saturated_fat_g: Some(6.0),
        sugar_g: Some(30.0),
        fiber_g: Some(5.0),
        sodium_mg: Some(250.0),
    })
    .with_per_serving(NutrientProfile {
        calories: Some(180.0),
        protein_g: Some(3.0),
        carbs_g: Some(26.0),
        ..NutrientProfile::default()
    })
}

/// Free-text food names exercising every class pattern and some misses
pub const CLASSIFIER_INPUTS: &[&str] = &[
    "hot dog with mustard",
    "pepperoni slice",
    "california roll",
    "chicken teriyaki",
    "tomato soup",
    "baked cod",
    "grilled chicken breast",
    "2 scrambled eggs",
    "steel cut oatmeal",
    "brown rice",
    "codfish cakes",
    "dragon fruit",
];
