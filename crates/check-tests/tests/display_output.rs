//! Display artifact structure tests

use anyhow::Result;
use check_tests::fixtures;
use oxvision_core::{HeatmapComparison, TrainTestCheck};

#[test]
fn test_default_labels() {
    let result = HeatmapComparison::new()
        .run(
            &fixtures::classification_train(),
            &fixtures::classification_test(),
        )
        .unwrap();

    let annotations = &result.display[0].layout.annotations;
    assert_eq!(annotations[0].text, "Train");
    assert_eq!(annotations[1].text, "Test");
    assert_eq!(annotations[2].text, "Brightness Difference");
}

#[test]
fn test_classification_produces_one_figure() {
    let result = HeatmapComparison::new()
        .run(
            &fixtures::classification_train(),
            &fixtures::classification_test(),
        )
        .unwrap();

    assert_eq!(result.display.len(), 1);
    assert_eq!(result.display[0].data.len(), 3);
}

#[test]
fn test_detection_produces_two_figures() {
    let result = HeatmapComparison::new()
        .run(&fixtures::detection_train(), &fixtures::detection_test())
        .unwrap();

    assert_eq!(result.display.len(), 2);
    let coverage_annotations = &result.display[1].layout.annotations;
    assert_eq!(coverage_annotations[0].text, "Train");
    assert_eq!(coverage_annotations[1].text, "Test");
    assert_eq!(coverage_annotations[2].text, "Bounding Box Coverage Difference");
}

#[test]
fn test_diff_trace_scale_follows_diff_max() {
    let result = HeatmapComparison::new()
        .run(&fixtures::detection_train(), &fixtures::detection_test())
        .unwrap();

    let diff = &result.value["diff"];
    let diff_trace = &result.display[0].data[2];
    assert_eq!(diff_trace.zmin, 0.0);
    assert!((diff_trace.zmax - diff.max()).abs() < 1e-12);
}

#[test]
fn test_figures_serialize_to_json() -> Result<()> {
    let result = HeatmapComparison::new().run(
        &fixtures::classification_train(),
        &fixtures::classification_test(),
    )?;

    let json = serde_json::to_value(&result.display[0])?;
    assert_eq!(json["layout"]["annotations"][0]["text"], "Train");
    assert_eq!(json["data"][0]["name"], "Train");
    assert!(json["data"][0]["z"].is_array());
    Ok(())
}
