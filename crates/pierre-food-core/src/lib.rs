// ABOUTME: Core types and constants for the Pierre food signal pipeline
// ABOUTME: Foundation crate with detection, nutrition, portion and score models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Food Core
//!
//! Foundation crate providing the plain data model shared by every stage of the
//! food signal pipeline. Types here carry no behaviour beyond small accessors, so
//! this crate changes infrequently and keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **models**: detection candidates, nutrition facts, classifications, portion
//!   estimates and health score results
//! - **constants**: physiological clamp domains and portion plausibility bounds

/// Application constants organized by domain
pub mod constants;

/// Core data models (candidates, nutrition, portions, scores)
pub mod models;
