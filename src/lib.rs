// ABOUTME: Main library entry point for the Pierre food signal pipeline
// ABOUTME: Re-exports the food data model, intelligence stages, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Food Pipeline
//!
//! Turns noisy food identification signals (vision labels, OCR text, barcode
//! lookups, free-text search) into ranked, portioned and health-scored data.
//!
//! ## Architecture
//!
//! - **`models`** / **`constants`**: plain data and physiological domains
//!   (`pierre-food-core`)
//! - **`intelligence`**: filter, ranker, class inference, portion resolver,
//!   health score and the pipeline chaining them (`pierre-food-intelligence`)
//! - **`config`**: tunable constants with environment overrides
//! - **`logging`**: subscriber setup and structured stage events
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_food_pipeline::models::DetectionCandidate;
//! use pierre_food_pipeline::FoodSignalPipeline;
//!
//! let pipeline = FoodSignalPipeline::default();
//! let plate = pipeline.analyze_plate(
//!     &[
//!         DetectionCandidate::new("salmon", 0.55).with_category("protein"),
//!         DetectionCandidate::new("lemon", 0.8),
//!         DetectionCandidate::new("lime", 0.78),
//!     ],
//!     None,
//! );
//! assert_eq!(plate.candidates[0].name(), "salmon");
//! assert_eq!(plate.items.len(), 2);
//! ```

/// Logging configuration and structured pipeline events
pub mod logging;

/// Food data model and domain constants
pub use pierre_food_core::{constants, models};

/// Pipeline stages
pub use pierre_food_intelligence as intelligence;

/// Tunable configuration for every stage
pub use pierre_food_intelligence::config;

pub use pierre_food_intelligence::{
    AnalyzedItem, ConfigError, FoodIntelligenceConfig, FoodSignalPipeline, ItemInput,
    PlateAnalysis, PortionRequest,
};
