//! Train/test comparison checks
//!
//! A check consumes two dataset handles read-only and produces a
//! [`CheckResult`]. Checks are stateless; every invocation is independent.

mod heatmap_comparison;

pub use heatmap_comparison::HeatmapComparison;

use crate::dataset::VisionData;
use crate::result::CheckResult;
use crate::Result;

/// Default cap on samples considered per dataset
pub const DEFAULT_N_SAMPLES: usize = 10_000;

/// Default seed for the subsampling RNG
pub const DEFAULT_RANDOM_STATE: u64 = 42;

/// Options shared by train/test check runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Cap on samples considered per dataset; `None` means unlimited
    pub n_samples: Option<usize>,
    /// Whether to produce display figures
    pub with_display: bool,
    /// Seed for the subsampling RNG
    pub random_state: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            n_samples: Some(DEFAULT_N_SAMPLES),
            with_display: true,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }
}

/// A check comparing a reference (train) dataset against a comparison
/// (test) dataset
pub trait TrainTestCheck {
    /// Human-readable check name
    fn name(&self) -> &'static str;

    /// Run the check with explicit options
    fn run_with(
        &self,
        train: &VisionData,
        test: &VisionData,
        options: &RunOptions,
    ) -> Result<CheckResult>;

    /// Run the check with default options
    fn run(&self, train: &VisionData, test: &VisionData) -> Result<CheckResult> {
        self.run_with(train, test, &RunOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.n_samples, Some(DEFAULT_N_SAMPLES));
        assert!(options.with_display);
        assert_eq!(options.random_state, DEFAULT_RANDOM_STATE);
    }
}
