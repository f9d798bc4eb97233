// ABOUTME: Portion estimate models with a closed provenance enum
// ABOUTME: PortionEstimate carries grams, source, confidence and a display label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Strategy that produced a portion estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PortionSource {
    /// Serving size declared on the package (OCR)
    DeclaredOcr,
    /// Serving size declared by a product database
    DeclaredDb,
    /// Derived from per-serving / per-100 g nutrient ratios
    RatioComputed,
    /// Category median from the portion table
    CategoryEstimate,
    /// Parsed from size/quantity words in the name
    TokenParsed,
    /// Explicit user override
    UserSet,
    /// Last-resort constant
    FallbackDefault,
}

impl PortionSource {
    /// Short label shown next to the gram value
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::DeclaredOcr => "OCR",
            Self::DeclaredDb => "DB",
            Self::RatioComputed => "calc",
            Self::CategoryEstimate => "typical",
            Self::TokenParsed => "size",
            Self::UserSet => "you",
            Self::FallbackDefault => "est.",
        }
    }

    /// Whether the grams came from a declaration rather than an estimate
    #[must_use]
    pub const fn is_declared(self) -> bool {
        matches!(self, Self::DeclaredOcr | Self::DeclaredDb | Self::UserSet)
    }
}

impl Display for PortionSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::DeclaredOcr => "declared-ocr",
            Self::DeclaredDb => "declared-db",
            Self::RatioComputed => "ratio-computed",
            Self::CategoryEstimate => "category-estimate",
            Self::TokenParsed => "token-parsed",
            Self::UserSet => "user-set",
            Self::FallbackDefault => "fallback-default",
        };
        f.write_str(name)
    }
}

/// The single gram quantity chosen for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortionEstimate {
    /// Portion weight in grams
    pub grams: f64,
    /// Strategy that produced the value
    pub source: PortionSource,
    /// Trust in the value, `[0, 1]`
    pub confidence: f64,
    /// Human-readable label, e.g. "30g · calc"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PortionEstimate {
    /// Build an estimate with the standard "{grams}g · {source}" label
    #[must_use]
    pub fn new(grams: f64, source: PortionSource, confidence: f64) -> Self {
        Self {
            grams,
            source,
            confidence,
            label: Some(format!("{grams:.0}g · {}", source.short_label())),
        }
    }

    /// Replace the label detail (e.g. the matched category name)
    #[must_use]
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.label = Some(format!("{:.0}g · {detail}", self.grams));
        self
    }
}
