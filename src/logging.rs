// ABOUTME: Logging configuration and structured logging setup for the food signal pipeline
// ABOUTME: Configures log levels, formatters and structured stage-outcome events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Logging configuration with structured output
//!
//! The pipeline crates only emit `tracing` events; installing a subscriber is
//! the embedding application's choice. [`LoggingConfig::init`] is the
//! batteries-included option.

use std::env;
use std::io;

use anyhow::{Context, Result};
use pierre_food_core::models::{HealthScoreResult, PortionEstimate, RankedCandidate};
use pierre_food_intelligence::{AnalyzedItem, FoodIntelligenceConfig};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default service name reported in structured logs
pub const DEFAULT_SERVICE_NAME: &str = "pierre-food-pipeline";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: DEFAULT_SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Build the filter: `RUST_LOG` if set, else the configured level
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        );
        ["pierre_food_intelligence", "pierre_food_pipeline"]
            .iter()
            .fold(base, |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| Level::INFO.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();

                registry
                    .with(json_layer)
                    .try_init()
                    .context("failed to install JSON tracing subscriber")?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout);

                registry
                    .with(pretty_layer)
                    .try_init()
                    .context("failed to install pretty tracing subscriber")?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stdout);

                registry
                    .with(compact_layer)
                    .try_init()
                    .context("failed to install compact tracing subscriber")?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Pierre food pipeline logging initialized"
        );
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events for pipeline stage outcomes
pub struct PipelineLogger;

impl PipelineLogger {
    /// Log which candidates survived filtering and ranking
    pub fn log_candidates_selected(detected: usize, selected: &[RankedCandidate]) {
        let names: Vec<&str> = selected.iter().map(RankedCandidate::name).collect();
        info!(
            candidates.detected = detected,
            candidates.selected = selected.len(),
            candidates.protein = selected.iter().filter(|c| c.is_protein).count(),
            candidates.names = ?names,
            "Candidates selected"
        );
    }

    /// Log a chosen portion
    pub fn log_portion_resolved(item: &str, portion: &PortionEstimate) {
        info!(
            item = %item,
            portion.grams = portion.grams,
            portion.source = %portion.source,
            portion.confidence = portion.confidence,
            "Portion resolved"
        );
    }

    /// Log a computed health score
    pub fn log_score_computed(item: &str, score: &HealthScoreResult) {
        info!(
            item = %item,
            score.value = score.final_score,
            score.penalties = score.components.penalties,
            score.bonuses = score.components.bonuses,
            score.stars = score.stars(),
            "Health score computed"
        );
    }

    /// Log every stage outcome of an analyzed item
    pub fn log_item_analyzed(item: &AnalyzedItem) {
        if let Some(class_id) = item
            .classification
            .as_ref()
            .and_then(|c| c.class_id.as_deref())
        {
            info!(item = %item.name, class.id = %class_id, "Generic class used");
        }
        Self::log_portion_resolved(&item.name, &item.portion);
        Self::log_score_computed(&item.name, &item.score);
    }

    /// Log a summary of the active tuning constants
    pub fn log_config_summary(config: &FoodIntelligenceConfig) {
        let summary = json!({
            "ranking": {
                "protein_boost": config.ranking.protein_boost,
                "survival_threshold": config.ranking.survival_threshold,
                "default_top_k": config.ranking.default_top_k,
            },
            "filter": {
                "exclusive_groups": config
                    .filter
                    .exclusive_groups
                    .iter()
                    .map(|group| json!({ "name": group.name, "gap": group.max_confidence_gap }))
                    .collect::<Vec<_>>(),
            },
            "portion": {
                "fallback_grams": config.portion.fallback.default_grams,
                "ratio_range": [config.portion.ratio.min_grams, config.portion.ratio.max_grams],
            },
            "scoring": {
                "penalty_weight_total": config.scoring.weights.penalty_total(),
                "ultra_processed_penalty": config.scoring.ultra_processed_penalty,
            },
        });
        info!("Food intelligence configuration: {summary}");
    }
}
