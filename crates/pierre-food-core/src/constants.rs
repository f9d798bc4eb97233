// ABOUTME: Domain constants for food signal processing
// ABOUTME: Clamp domains for scoring inputs, portion bounds and ranking defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values here are reference data, not tunables. Tunable weights and thresholds
//! live in the intelligence crate configuration and default to these values.

/// Physiological clamp domains applied before health scoring
pub mod score_domains {
    /// Maximum calories per serving considered (kcal)
    pub const MAX_CALORIES_PER_SERVING: f64 = 1200.0;
    /// Maximum sugar per 100 g (g)
    pub const MAX_SUGAR_G_PER_100G: f64 = 100.0;
    /// Maximum saturated fat per 100 g (g)
    pub const MAX_SATURATED_FAT_G_PER_100G: f64 = 100.0;
    /// Maximum sodium per 100 g (mg)
    pub const MAX_SODIUM_MG_PER_100G: f64 = 5000.0;
    /// Maximum fiber per 100 g (g)
    pub const MAX_FIBER_G_PER_100G: f64 = 30.0;
    /// Maximum protein per 100 g (g)
    pub const MAX_PROTEIN_G_PER_100G: f64 = 80.0;
    /// Maximum number of additives counted
    pub const MAX_ADDITIVE_COUNT: f64 = 30.0;
}

/// Portion estimation reference values
pub mod portions {
    /// Last-resort portion when nothing else is known (g)
    pub const DEFAULT_PORTION_GRAMS: f64 = 30.0;
    /// Smallest plausible ratio-computed portion (g)
    pub const RATIO_MIN_GRAMS: f64 = 5.0;
    /// Largest plausible ratio-computed portion (g)
    pub const RATIO_MAX_GRAMS: f64 = 300.0;
    /// Smallest accepted declared serving (g)
    pub const DECLARED_MIN_GRAMS: f64 = 1.0;
    /// Largest accepted declared serving (g)
    pub const DECLARED_MAX_GRAMS: f64 = 1000.0;
    /// Water-like density used for millilitre tokens (g/ml)
    pub const WATER_DENSITY_G_PER_ML: f64 = 1.0;
}

/// Unit conversion constants
pub mod units {
    /// Grams per avoirdupois ounce
    pub const GRAMS_PER_OZ: f64 = 28.35;
    /// Millilitres per fluid ounce (US)
    pub const ML_PER_FL_OZ: f64 = 29.57;
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Millilitres per litre
    pub const ML_PER_LITRE: f64 = 1000.0;
}

/// Candidate ranking defaults
pub mod ranking {
    /// Additive score boost for protein-class candidates
    pub const PROTEIN_BOOST: f64 = 0.15;
    /// Minimum boosted score for a protein candidate to survive truncation
    pub const PROTEIN_SURVIVAL_THRESHOLD: f64 = 0.6;
    /// Default number of candidates returned
    pub const DEFAULT_TOP_K: usize = 5;
    /// Maximum confidence gap for collapsing mutually-exclusive variants
    pub const CITRUS_MAX_CONFIDENCE_GAP: f64 = 0.2;
}
