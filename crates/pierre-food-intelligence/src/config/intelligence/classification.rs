// ABOUTME: Class inference configuration for canonical food pattern matching
// ABOUTME: Confidence assigned to word-boundary anchored versus plain substring matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Class inference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Confidence for patterns containing a `\b` anchor
    pub anchored_confidence: f64,
    /// Confidence for plain substring patterns
    pub substring_confidence: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            anchored_confidence: 0.9,
            substring_confidence: 0.7,
        }
    }
}
