//! Display artifacts
//!
//! Checks describe their output figures as plain data: heatmap traces plus
//! layout annotations. Rendering is left to downstream consumers; the
//! structures serialize to JSON via serde.

use serde::Serialize;

use crate::heatmap::Heatmap;

/// A text annotation positioned in figure coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Annotation text
    pub text: String,
    /// Horizontal position in [0, 1] figure fraction
    pub x: f64,
    /// Vertical position in figure fraction; values above 1 sit over the plot
    pub y: f64,
}

/// Figure-level layout
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FigureLayout {
    /// Figure title
    pub title: Option<String>,
    /// Ordered annotations, one per trace
    pub annotations: Vec<Annotation>,
}

/// One heatmap panel inside a figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    /// Trace name
    pub name: String,
    /// Values as rows, top row first
    pub z: Vec<Vec<f64>>,
    /// Color scale lower bound
    pub zmin: f64,
    /// Color scale upper bound
    pub zmax: f64,
}

impl HeatmapTrace {
    /// Build a trace from a heatmap with an explicit color scale
    pub fn from_heatmap(name: impl Into<String>, heatmap: &Heatmap, zmin: f64, zmax: f64) -> Self {
        Self {
            name: name.into(),
            z: heatmap.to_rows(),
            zmin,
            zmax,
        }
    }
}

/// A renderable figure: layout plus ordered traces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Layout with title and annotations
    pub layout: FigureLayout,
    /// Traces in panel order
    pub data: Vec<HeatmapTrace>,
}

// Annotation columns for a three-panel figure, matching the trace order.
const PANEL_X: [f64; 3] = [0.12, 0.5, 0.88];
const PANEL_Y: f64 = 1.08;

impl Figure {
    /// A three-panel heatmap figure: reference, comparison, difference
    ///
    /// Annotation order follows input order: reference label first,
    /// comparison label second, difference label last.
    pub fn three_panel(
        title: impl Into<String>,
        panels: [(&str, &Heatmap, f64); 3],
    ) -> Self {
        let annotations = panels
            .iter()
            .zip(PANEL_X)
            .map(|((label, _, _), x)| Annotation {
                text: (*label).to_string(),
                x,
                y: PANEL_Y,
            })
            .collect();
        let data = panels
            .iter()
            .map(|(label, heatmap, zmax)| HeatmapTrace::from_heatmap(*label, heatmap, 0.0, *zmax))
            .collect();
        Self {
            layout: FigureLayout {
                title: Some(title.into()),
                annotations,
            },
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_panel_annotation_order() {
        let hm = Heatmap::zeros(2, 2);
        let fig = Figure::three_panel(
            "Brightness",
            [("Ref", &hm, 255.0), ("Win", &hm, 255.0), ("Difference", &hm, 255.0)],
        );
        assert_eq!(fig.layout.annotations[0].text, "Ref");
        assert_eq!(fig.layout.annotations[1].text, "Win");
        assert_eq!(fig.layout.annotations[2].text, "Difference");
        assert_eq!(fig.data.len(), 3);
    }

    #[test]
    fn test_figure_serializes() {
        let hm = Heatmap::new(1, 1, vec![4.5]).unwrap();
        let fig = Figure::three_panel(
            "Brightness",
            [("Train", &hm, 255.0), ("Test", &hm, 255.0), ("Difference", &hm, 4.5)],
        );
        let json = serde_json::to_string(&fig).unwrap();
        assert!(json.contains("\"text\":\"Train\""));
        assert!(json.contains("\"z\":[[4.5]]"));
    }
}
