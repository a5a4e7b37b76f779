//! Mathematical operations for heatmap computation
//!
//! This module provides foundational math used throughout oxvision:
//! - Linear and bilinear interpolation for plane resampling
//! - Destination-to-source coordinate mapping

pub mod interpolation;

pub use interpolation::{bilinear, lerp, source_coord};
