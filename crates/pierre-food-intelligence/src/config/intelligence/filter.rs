// ABOUTME: Candidate filter configuration for detector noise suppression
// ABOUTME: Declares mutually-exclusive variant groups such as the citrus throttle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate Filter Configuration
//!
//! A detector frequently reports several visually similar variants of the same
//! object (a lemon wedge labelled both "lemon" and "lime"). Each
//! [`ExclusiveGroup`] names such a set; when the two most confident members are
//! close, only the best one is kept.

use pierre_food_core::constants::ranking::CITRUS_MAX_CONFIDENCE_GAP;
use serde::{Deserialize, Serialize};

/// Candidate filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Groups of names that should collapse to a single survivor
    pub exclusive_groups: Vec<ExclusiveGroup>,
}

/// A closed set of names treated as mutually-exclusive visual variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusiveGroup {
    /// Group name used in diagnostics
    pub name: String,
    /// Member names, matched case-insensitively
    pub members: Vec<String>,
    /// Largest best-minus-second confidence gap that still collapses the group
    pub max_confidence_gap: f64,
}

impl ExclusiveGroup {
    /// The lemon/lime throttle
    #[must_use]
    pub fn citrus() -> Self {
        Self {
            name: "citrus".into(),
            members: vec!["lemon".into(), "lime".into()],
            max_confidence_gap: CITRUS_MAX_CONFIDENCE_GAP,
        }
    }

    /// Case-insensitive membership test; members need not be stored lowercase
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let normalized = name.trim().to_lowercase();
        self.members
            .iter()
            .any(|member| member.trim().to_lowercase() == normalized)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclusive_groups: vec![ExclusiveGroup::citrus()],
        }
    }
}
