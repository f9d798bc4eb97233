// ABOUTME: Integration tests for logging configuration and subscriber installation
// ABOUTME: Validates environment parsing and that a second global subscriber is refused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_food_pipeline::logging::{init_default, LogFormat, LoggingConfig, PipelineLogger};
use pierre_food_pipeline::FoodIntelligenceConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_from_env_reads_format_and_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "food-signals-test");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "food-signals-test");
    assert!(config.include_location);
    assert!(config.include_thread);

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_from_env_defaults() {
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("LOG_INCLUDE_THREAD");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_second_subscriber_is_refused() {
    // Whichever call installs first, the next one must fail
    let _ = init_default();
    assert!(init_default().is_err());

    PipelineLogger::log_config_summary(&FoodIntelligenceConfig::default());
}
