//! Expected statistics for the fixture datasets
//!
//! Values are derived from the schedules in [`crate::fixtures`], not
//! captured from a run; see the derivations in that module's docs.

use oxvision_core::Heatmap;

/// Tolerance for all statistic comparisons
pub const TOLERANCE: f64 = 0.001;

/// Expected mean/max of a diff heatmap
#[derive(Debug, Clone, Copy)]
pub struct ExpectedStats {
    /// Expected mean over all cells
    pub mean: f64,
    /// Expected maximum cell value
    pub max: f64,
}

/// Detection pair, brightness diff
pub const DETECTION_BRIGHTNESS: ExpectedStats = ExpectedStats {
    mean: 10.420,
    max: 45.0,
};

/// Detection pair, bounding box coverage diff
pub const DETECTION_COVERAGE: ExpectedStats = ExpectedStats {
    mean: 5.589,
    max: 24.0,
};

/// Classification pair, brightness diff over all classes
pub const CLASSIFICATION_BRIGHTNESS: ExpectedStats = ExpectedStats {
    mean: 1.095,
    max: 9.0,
};

/// Classification pair restricted to class "9"
pub const CLASSIFICATION_CLASS_9: ExpectedStats = ExpectedStats {
    mean: 2.149,
    max: 21.0,
};

/// Assert a scalar is within [`TOLERANCE`] of the expected value
pub fn assert_close(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "{label}: expected {expected} +/- {TOLERANCE}, got {actual}"
    );
}

/// Assert a heatmap's mean and max match the expected statistics
pub fn assert_stats(heatmap: &Heatmap, expected: ExpectedStats, label: &str) {
    assert_close(heatmap.mean(), expected.mean, &format!("{label} mean"));
    assert_close(heatmap.max(), expected.max, &format!("{label} max"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_close_within_tolerance() {
        assert_close(10.4201, 10.420, "inside");
    }

    #[test]
    #[should_panic(expected = "outside mean")]
    fn test_assert_close_outside_tolerance() {
        let hm = Heatmap::new(1, 1, vec![3.0]).unwrap();
        assert_stats(&hm, ExpectedStats { mean: 1.0, max: 3.0 }, "outside");
    }
}
