//! Fixture datasets with hand-derivable statistics
//!
//! All fixtures live on a 10x10 grid so the heatmap statistics in
//! [`crate::baseline`] can be derived on paper from the per-pixel schedules
//! below, rather than re-captured from a run.
//!
//! Detection pair (850 images per side, RGB, identical within each side):
//! - brightness diff: 20 cells at 45, 71 cells at 2, 9 cells at 0
//!   -> sum 1042, mean 10.420, max 45
//! - coverage diff: 23 cells at 255*80/850 = 24.0, one cell at
//!   255*23/850 = 6.9 -> sum 558.9, mean 5.589, max 24
//!
//! Classification pair (10 classes x 10 images per side, grayscale):
//! - full diff: 12 cells at 9, one cell at 1.5 -> sum 109.5, mean 1.095,
//!   max 9
//! - class "9" subset diff: 10 cells at 21, one cell at 4.9 -> sum 214.9,
//!   mean 2.149, max 21
//!
//! The class "0" schedule mirrors class "9" with train and test swapped, so
//! the two cancel in the full-dataset average while the subset keeps its
//! own difference.

use oxvision_core::{BoundingBox, ImageBuffer, Sample, TaskType, VisionData};

/// Fixture grid edge, in pixels
pub const GRID: u32 = 10;

const GRID_CELLS: usize = (GRID * GRID) as usize;

// ---------------------------------------------------------------------------
// Object detection
// ---------------------------------------------------------------------------

/// Images per detection dataset; the coverage denominator
pub const DETECTION_IMAGES: usize = 850;

/// Brightness delta between train and test at cell `p`
fn detection_brightness_delta(p: usize) -> u8 {
    if p < 20 {
        // rows 0-1
        45
    } else if p >= 91 {
        // tail of row 9
        0
    } else {
        2
    }
}

fn detection_image(train: bool) -> ImageBuffer {
    let mut data = Vec::with_capacity(GRID_CELLS * 3);
    for p in 0..GRID_CELLS {
        let value = if train {
            120 + detection_brightness_delta(p)
        } else {
            120
        };
        data.extend_from_slice(&[value, value, value]);
    }
    ImageBuffer::rgb(GRID, GRID, data).expect("fixture buffer matches dimensions")
}

fn detection_boxes(train: bool, index: usize) -> Vec<BoundingBox> {
    let mut boxes = Vec::new();
    // Shared band: covered by both sides in 100 of 850 images, so the
    // coverage difference there is zero while both class sets stay
    // non-empty.
    if index < 100 {
        boxes.push(BoundingBox::new("person", 0.0, 0.0, 10.0, 2.0));
    }
    if train {
        if index < 80 {
            boxes.push(BoundingBox::new("car", 0.0, 4.0, 10.0, 2.0));
            boxes.push(BoundingBox::new("car", 0.0, 6.0, 3.0, 1.0));
        }
        if index < 23 {
            boxes.push(BoundingBox::new("dog", 3.0, 6.0, 1.0, 1.0));
        }
    }
    boxes
}

fn detection_dataset(train: bool) -> VisionData {
    let image = detection_image(train);
    let samples = (0..DETECTION_IMAGES)
        .map(|index| Sample::detection(image.clone(), detection_boxes(train, index)))
        .collect();
    VisionData::new(TaskType::ObjectDetection, samples).expect("fixture labels match task")
}

/// Detection reference dataset
pub fn detection_train() -> VisionData {
    detection_dataset(true)
}

/// Detection comparison dataset
pub fn detection_test() -> VisionData {
    detection_dataset(false)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Images per class per classification dataset
pub const IMAGES_PER_CLASS: usize = 10;

/// Number of classification classes ("0" through "9")
pub const CLASS_COUNT: u8 = 10;

fn classification_pixel(class: u8, train: bool, image_index: usize, p: usize) -> u8 {
    match class {
        9 => {
            if p < 10 {
                if train { 21 } else { 0 }
            } else if p == 10 {
                if !train {
                    0
                } else if image_index < 9 {
                    5
                } else {
                    4
                }
            } else {
                190
            }
        }
        0 => {
            // Mirror of class "9": the full-dataset sums cancel.
            if p < 10 {
                if train { 0 } else { 21 }
            } else if p == 10 {
                if train {
                    0
                } else if image_index < 9 {
                    5
                } else {
                    4
                }
            } else {
                10
            }
        }
        1 => {
            if (50..=61).contains(&p) {
                if train { 90 } else { 0 }
            } else if p == 62 {
                if train { 15 } else { 0 }
            } else {
                30
            }
        }
        c => 40 + 10 * c,
    }
}

fn classification_image(class: u8, train: bool, image_index: usize) -> ImageBuffer {
    let data = (0..GRID_CELLS)
        .map(|p| classification_pixel(class, train, image_index, p))
        .collect();
    ImageBuffer::gray(GRID, GRID, data).expect("fixture buffer matches dimensions")
}

fn classification_samples(train: bool) -> Vec<ImageBuffer> {
    let mut images = Vec::with_capacity(CLASS_COUNT as usize * IMAGES_PER_CLASS);
    for class in 0..CLASS_COUNT {
        for image_index in 0..IMAGES_PER_CLASS {
            images.push(classification_image(class, train, image_index));
        }
    }
    images
}

fn classification_dataset(train: bool) -> VisionData {
    let samples = classification_samples(train)
        .into_iter()
        .enumerate()
        .map(|(i, image)| {
            let class = (i / IMAGES_PER_CLASS) as u8;
            Sample::classification(image, class.to_string())
        })
        .collect();
    VisionData::new(TaskType::Classification, samples).expect("fixture labels match task")
}

/// Classification reference dataset
pub fn classification_train() -> VisionData {
    classification_dataset(true)
}

/// Classification comparison dataset
pub fn classification_test() -> VisionData {
    classification_dataset(false)
}

// ---------------------------------------------------------------------------
// Custom task
// ---------------------------------------------------------------------------

fn custom_task_dataset(train: bool) -> VisionData {
    let samples = classification_samples(train)
        .into_iter()
        .map(Sample::unlabeled)
        .collect();
    VisionData::new(TaskType::Other, samples).expect("fixture labels match task")
}

/// Custom-task reference dataset over the classification images
pub fn custom_task_train() -> VisionData {
    custom_task_dataset(true)
}

/// Custom-task comparison dataset over the classification images
pub fn custom_task_test() -> VisionData {
    custom_task_dataset(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_sizes() {
        let train = detection_train();
        assert_eq!(train.len(), DETECTION_IMAGES);
        assert_eq!(train.samples()[0].image.width(), GRID);
        assert_eq!(train.samples()[0].image.height(), GRID);
    }

    #[test]
    fn test_detection_class_sets() {
        let train = detection_train().classes();
        let test = detection_test().classes();
        assert!(train.contains("person"));
        assert!(train.contains("car"));
        assert!(train.contains("dog"));
        assert_eq!(test.len(), 1);
        assert!(test.contains("person"));
    }

    #[test]
    fn test_classification_classes() {
        let classes = classification_train().classes();
        assert_eq!(classes.len(), CLASS_COUNT as usize);
        assert!(classes.contains("0"));
        assert!(classes.contains("9"));
    }

    #[test]
    fn test_custom_task_has_no_classes() {
        assert!(custom_task_train().classes().is_empty());
    }
}
