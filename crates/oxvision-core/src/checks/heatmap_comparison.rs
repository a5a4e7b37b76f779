//! Heatmap comparison check
//!
//! Compares the average brightness of a train dataset against a test
//! dataset, pixel by pixel on a common grid. For object detection datasets
//! the average bounding box coverage is compared as well.
//!
//! The result's `value` maps `"diff"` (and `"diff_bbox"` for detection) to
//! the absolute-difference heatmaps; `display` carries one three-panel
//! figure per compared heatmap.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::{RunOptions, TrainTestCheck};
use crate::brightness::brightness_plane;
use crate::dataset::{Label, Sample, TaskType, VisionData};
use crate::display::Figure;
use crate::heatmap::{Heatmap, HeatmapAccumulator};
use crate::result::CheckResult;
use crate::{Error, Result};

/// Compares average image brightness (and bounding box coverage for
/// detection) between two datasets
///
/// The comparison grid is the pixel size of the first retained train image;
/// all other brightness planes are resampled to it bilinearly.
#[derive(Debug, Clone, Default)]
pub struct HeatmapComparison {
    classes_to_display: Option<Vec<String>>,
}

impl HeatmapComparison {
    /// A check with no class filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the comparison to samples of the given class ids
    ///
    /// Every id must exist in the train dataset's class set; the run fails
    /// with a value error otherwise, before any computation.
    pub fn with_classes_to_display(mut self, classes: Vec<String>) -> Self {
        self.classes_to_display = Some(classes);
        self
    }

    fn validated_class_filter(
        &self,
        train: &VisionData,
        task: TaskType,
    ) -> Result<Option<BTreeSet<String>>> {
        let Some(ids) = &self.classes_to_display else {
            return Ok(None);
        };
        if task == TaskType::Other {
            return Err(Error::NotSupported(
                "Class filtering requires a labeled task (classification or object detection)."
                    .to_string(),
            ));
        }
        let known = train.classes();
        let missing: Vec<&String> = ids.iter().filter(|id| !known.contains(id.as_str())).collect();
        if !missing.is_empty() {
            return Err(Error::Value(format!(
                "Provided list of class ids to display {missing:?} not found in training dataset."
            )));
        }
        Ok(Some(ids.iter().cloned().collect()))
    }
}

impl TrainTestCheck for HeatmapComparison {
    fn name(&self) -> &'static str {
        "Heatmap Comparison"
    }

    fn run_with(
        &self,
        train: &VisionData,
        test: &VisionData,
        options: &RunOptions,
    ) -> Result<CheckResult> {
        if train.task() != test.task() {
            return Err(Error::NotSupported(format!(
                "Cannot compare a {:?} dataset to a {:?} dataset.",
                train.task(),
                test.task()
            )));
        }
        let task = train.task();
        let class_filter = self.validated_class_filter(train, task)?;

        let train_samples = retain_classes(
            subsample(train.samples(), options),
            class_filter.as_ref(),
        );
        let test_samples = retain_classes(
            subsample(test.samples(), options),
            class_filter.as_ref(),
        );
        ensure_samples(&train_samples, "training", class_filter.as_ref())?;
        ensure_samples(&test_samples, "test", class_filter.as_ref())?;

        let grid_width = train_samples[0].image.width();
        let grid_height = train_samples[0].image.height();
        debug!(
            "heatmap comparison on a {}x{} grid: {} train / {} test samples",
            grid_width,
            grid_height,
            train_samples.len(),
            test_samples.len()
        );

        let train_brightness = brightness_heatmap(&train_samples, grid_width, grid_height)?;
        let test_brightness = brightness_heatmap(&test_samples, grid_width, grid_height)?;
        let diff = train_brightness.abs_diff(&test_brightness)?;

        let coverage = if task == TaskType::ObjectDetection {
            let train_coverage =
                coverage_heatmap(&train_samples, grid_width, grid_height, class_filter.as_ref())?;
            let test_coverage =
                coverage_heatmap(&test_samples, grid_width, grid_height, class_filter.as_ref())?;
            let diff_bbox = train_coverage.abs_diff(&test_coverage)?;
            Some((train_coverage, test_coverage, diff_bbox))
        } else {
            None
        };

        let mut display = Vec::new();
        if options.with_display {
            let train_label = train.name().unwrap_or("Train");
            let test_label = test.name().unwrap_or("Test");
            display.push(Figure::three_panel(
                "Compare average image brightness",
                [
                    (train_label, &train_brightness, 255.0),
                    (test_label, &test_brightness, 255.0),
                    ("Brightness Difference", &diff, diff.max()),
                ],
            ));
            if let Some((train_coverage, test_coverage, diff_bbox)) = &coverage {
                display.push(Figure::three_panel(
                    "Compare bounding box coverage",
                    [
                        (train_label, train_coverage, 255.0),
                        (test_label, test_coverage, 255.0),
                        (
                            "Bounding Box Coverage Difference",
                            diff_bbox,
                            diff_bbox.max(),
                        ),
                    ],
                ));
            }
        }

        let mut value = BTreeMap::new();
        value.insert("diff".to_string(), diff);
        if let Some((_, _, diff_bbox)) = coverage {
            value.insert("diff_bbox".to_string(), diff_bbox);
        }

        Ok(CheckResult { value, display })
    }
}

/// Cap the sample list per the run options, preserving dataset order
fn subsample<'a>(samples: &'a [Sample], options: &RunOptions) -> Vec<&'a Sample> {
    match options.n_samples {
        Some(cap) if samples.len() > cap => {
            let mut rng = ChaCha8Rng::seed_from_u64(options.random_state);
            let mut indices = rand::seq::index::sample(&mut rng, samples.len(), cap).into_vec();
            indices.sort_unstable();
            indices.into_iter().map(|i| &samples[i]).collect()
        }
        _ => samples.iter().collect(),
    }
}

/// Keep samples matching the class filter; detection samples qualify when
/// any of their boxes does
fn retain_classes<'a>(
    samples: Vec<&'a Sample>,
    classes: Option<&BTreeSet<String>>,
) -> Vec<&'a Sample> {
    let Some(set) = classes else {
        return samples;
    };
    samples
        .into_iter()
        .filter(|sample| match &sample.label {
            Label::Class(class_id) => set.contains(class_id),
            Label::Boxes(boxes) => boxes.iter().any(|b| set.contains(&b.class_id)),
            Label::None => false,
        })
        .collect()
}

fn ensure_samples(
    samples: &[&Sample],
    which: &str,
    classes: Option<&BTreeSet<String>>,
) -> Result<()> {
    if !samples.is_empty() {
        return Ok(());
    }
    match classes {
        Some(set) => {
            let ids: Vec<&String> = set.iter().collect();
            Err(Error::Value(format!(
                "No samples of classes {ids:?} found in {which} dataset."
            )))
        }
        None => Err(Error::Value(format!(
            "The {which} dataset contains no samples."
        ))),
    }
}

/// Average brightness of the samples on the comparison grid
///
/// Planes are computed in parallel but accumulated in dataset order, so the
/// result is identical across runs.
fn brightness_heatmap(samples: &[&Sample], width: u32, height: u32) -> Result<Heatmap> {
    let planes: Vec<Heatmap> = samples
        .par_iter()
        .map(|sample| brightness_plane(&sample.image).resample_bilinear(width, height))
        .collect();
    let mut accumulator = HeatmapAccumulator::new(width, height);
    for plane in &planes {
        accumulator.push(plane)?;
    }
    accumulator
        .mean()
        .ok_or_else(|| Error::Value("Cannot average an empty sample set.".to_string()))
}

/// Average bounding box coverage of the samples on the comparison grid,
/// scaled to [0, 255]
fn coverage_heatmap(
    samples: &[&Sample],
    width: u32,
    height: u32,
    classes: Option<&BTreeSet<String>>,
) -> Result<Heatmap> {
    let masks: Vec<Heatmap> = samples
        .par_iter()
        .map(|sample| coverage_mask(sample, width, height, classes))
        .collect();
    let mut accumulator = HeatmapAccumulator::new(width, height);
    for mask in &masks {
        accumulator.push(mask)?;
    }
    accumulator
        .mean()
        .ok_or_else(|| Error::Value("Cannot average an empty sample set.".to_string()))
}

/// Binary coverage mask of one sample's boxes on the grid, 255 inside boxes
fn coverage_mask(
    sample: &Sample,
    width: u32,
    height: u32,
    classes: Option<&BTreeSet<String>>,
) -> Heatmap {
    let mut data = vec![0.0; width as usize * height as usize];
    let scale_x = width as f64 / sample.image.width() as f64;
    let scale_y = height as f64 / sample.image.height() as f64;
    for bbox in sample.label.boxes() {
        if let Some(set) = classes {
            if !set.contains(&bbox.class_id) {
                continue;
            }
        }
        let x0 = (bbox.x * scale_x).floor().max(0.0) as u32;
        let y0 = (bbox.y * scale_y).floor().max(0.0) as u32;
        let x1 = ((bbox.x + bbox.width) * scale_x).ceil().min(width as f64) as u32;
        let y1 = ((bbox.y + bbox.height) * scale_y).ceil().min(height as f64) as u32;
        for y in y0..y1 {
            let row = y as usize * width as usize;
            for x in x0..x1 {
                data[row + x as usize] = 255.0;
            }
        }
    }
    Heatmap::from_raw(width, height, data)
}
