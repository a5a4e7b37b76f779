//! # check-tests
//!
//! Scenario tests for oxvision checks.
//!
//! This crate provides:
//! - Fixture datasets whose heatmap statistics are derivable on paper
//! - Baseline statistics and tolerance assertions
//! - Deterministic image pattern generation for property tests and benches
//!
//! ## Test Categories
//!
//! 1. **Scenario tests**: the heatmap comparison check against the fixture
//!    pairs (detection, classification, custom task, class filters)
//! 2. **Display tests**: figure structure, annotation labeling, serialization
//! 3. **Validation tests**: dataset construction errors and determinism
//!    under resampling and subsampling

pub mod baseline;
pub mod fixtures;
pub mod patterns;

pub use baseline::{assert_close, assert_stats, ExpectedStats, TOLERANCE};
pub use patterns::ImagePattern;
