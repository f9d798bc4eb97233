// ABOUTME: Configuration error types for food intelligence loading and validation
// ABOUTME: Covers unreadable or unparseable environment overrides and inconsistent stage settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for food intelligence validation.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lower bound not below upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Override variable is set but not valid Unicode
    #[error("Environment variable {name} is unreadable: {source}")]
    EnvVar {
        /// Variable name
        name: &'static str,
        /// Underlying lookup failure
        #[source]
        source: env::VarError,
    },

    /// Override variable does not parse as the target type
    #[error("Invalid value {value:?} for {name}")]
    Parse {
        /// Variable name
        name: &'static str,
        /// Raw value as set
        value: String,
    },

    /// Score weights don't sum to the expected total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Exclusive group that can never collapse anything
    #[error("Invalid exclusive group {group:?}: {reason}")]
    InvalidGroup {
        /// Group name
        group: String,
        /// What is wrong with it
        reason: &'static str,
    },
}
