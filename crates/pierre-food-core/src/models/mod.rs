// ABOUTME: Core data models for the food signal pipeline
// ABOUTME: Re-exports detection, nutrition, classification, portion and score types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every type is plain, serializable data. Stages consume these values by
//! reference and return fresh values; nothing here is mutated in place by the
//! pipeline.

/// Classification results and generic macro records
pub mod classification;
/// Detector candidates and ranked candidates
pub mod detection;
/// Nutrition facts per 100 g and per serving
pub mod nutrition;
/// Portion estimates and their provenance
pub mod portion;
/// Health score results and breakdowns
pub mod score;

pub use classification::{ClassificationResult, GenericFoodRecord, GenericMacroRecord};
pub use detection::{DetectionCandidate, FoodCategory, RankedCandidate};
pub use nutrition::{NutrientProfile, NutritionFacts};
pub use portion::{PortionEstimate, PortionSource};
pub use score::{HealthScoreResult, NormalizedNutrition, ScoreBreakdown};
