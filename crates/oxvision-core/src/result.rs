//! Check results

use std::collections::BTreeMap;

use serde::Serialize;

use crate::display::Figure;
use crate::heatmap::Heatmap;

/// The outcome of a single check invocation
///
/// `value` maps statistic names to heatmaps; key order is deterministic.
/// `display` holds the figures produced for that run, empty when display
/// was disabled.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Named numeric results
    pub value: BTreeMap<String, Heatmap>,
    /// Renderable figures in output order
    pub display: Vec<Figure>,
}

impl CheckResult {
    /// A result with no values and no display
    pub fn empty() -> Self {
        Self {
            value: BTreeMap::new(),
            display: Vec::new(),
        }
    }
}
