//! # oxvision - Oxidized Vision Data Validation
//!
//! Dataset validation checks for computer vision data in Rust.
//!
//! ## Goals
//!
//! - **Deterministic**: identical inputs and options always produce
//!   identical statistics, including under subsampling
//! - **Safe**: pure Rust, no panics on caller input
//! - **Structured**: checks return named numeric heatmaps plus data-only
//!   display figures, ready for serialization
//!
//! ## Quick Start
//!
//! ```
//! use oxvision_core::{HeatmapComparison, ImageBuffer, Sample, TaskType, TrainTestCheck, VisionData};
//!
//! fn main() -> oxvision_core::Result<()> {
//!     let train = VisionData::new(
//!         TaskType::Classification,
//!         vec![Sample::classification(
//!             ImageBuffer::gray(2, 2, vec![10, 20, 30, 40])?,
//!             "0",
//!         )],
//!     )?;
//!     let test = VisionData::new(
//!         TaskType::Classification,
//!         vec![Sample::classification(
//!             ImageBuffer::gray(2, 2, vec![20, 20, 30, 40])?,
//!             "0",
//!         )],
//!     )?;
//!
//!     let result = HeatmapComparison::new().run(&train, &test)?;
//!     assert!((result.value["diff"].mean() - 2.5).abs() < 1e-9);
//!     Ok(())
//! }
//! ```

pub mod brightness;
pub mod checks;
pub mod dataset;
pub mod display;
pub mod error;
pub mod heatmap;
pub mod math;
pub mod result;
pub mod simd;

pub use checks::{HeatmapComparison, RunOptions, TrainTestCheck};
pub use dataset::{BoundingBox, Channels, ImageBuffer, Label, Sample, TaskType, VisionData};
pub use display::{Annotation, Figure, FigureLayout, HeatmapTrace};
pub use error::{Error, Result};
pub use heatmap::{Heatmap, HeatmapAccumulator};
pub use result::CheckResult;

/// Version of oxvision
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
