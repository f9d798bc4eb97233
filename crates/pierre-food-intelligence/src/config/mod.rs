// ABOUTME: Configuration module for pierre-food-intelligence crate
// ABOUTME: Re-exports food intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food intelligence configuration (filter, ranking, classification, portions, scoring)
pub mod intelligence;

pub use intelligence::{ConfigError, FoodIntelligenceConfig};
