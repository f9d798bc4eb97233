// ABOUTME: Food signal intelligence engine for the Pierre platform
// ABOUTME: Candidate filtering, ranking, class inference, portion resolution and health scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Food Intelligence
//!
//! Turns noisy, multi-source food identification signals into ranked,
//! portioned and scored data. Every stage is a pure, synchronous function over
//! immutable inputs; the caller owns I/O, retries and caching.
//!
//! Stage order for one plate:
//!
//! 1. [`candidate_filter`] drops redundant detector variants
//! 2. [`candidate_ranker`] boosts protein and selects top-K with survival
//! 3. [`class_inference`] maps free text to a canonical class and generic macros
//! 4. [`portion_resolver`] chooses one gram quantity through a strategy waterfall
//! 5. [`health_score`] turns nutrition facts into a bounded 0-100 score
//!
//! [`pipeline`] chains the stages for callers that want all of them.

/// Quality filtering of detector candidates
pub mod candidate_filter;
/// Confidence ranking with protein survival
pub mod candidate_ranker;
/// Canonical class inference and generic macro fallback
pub mod class_inference;
/// Tunable configuration for every stage
pub mod config;
/// Deterministic bounded health scoring
pub mod health_score;
/// Stage orchestration for one plate or item
pub mod pipeline;
/// Multi-strategy portion size resolution
pub mod portion_resolver;

pub use candidate_filter::{apply_exclusive_group, filter_candidates, throttle_citrus};
pub use candidate_ranker::{boost_candidates, is_protein, rank_candidates, select_with_survival};
pub use class_inference::{classify_food, generic_fallback, generic_macros};
pub use config::{ConfigError, FoodIntelligenceConfig};
pub use health_score::{
    calculate_health_score, count_additives, looks_ultra_processed, normalize_nutrition,
};
pub use pipeline::{AnalyzedItem, FoodSignalPipeline, ItemInput, PlateAnalysis};
pub use portion_resolver::{resolve_portion, scale_to_portion, PortionRequest};
