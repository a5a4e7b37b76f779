//! Dataset handles
//!
//! A [`VisionData`] is an in-memory collection of labeled samples consumed
//! read-only by checks. Construction validates that every sample's label
//! matches the declared task type; malformed pixel buffers are rejected at
//! [`ImageBuffer`] construction.

mod image;
mod label;

pub use image::{Channels, ImageBuffer};
pub use label::{BoundingBox, Label};

use std::collections::BTreeSet;

use crate::{Error, Result};

/// The learning task a dataset is annotated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// Single class id per image
    Classification,
    /// Bounding boxes per image
    ObjectDetection,
    /// Custom task; labels are opaque to checks
    Other,
}

/// One image with its label
#[derive(Debug, Clone)]
pub struct Sample {
    /// Pixel data
    pub image: ImageBuffer,
    /// Label matching the dataset's task type
    pub label: Label,
}

impl Sample {
    /// A classification sample
    pub fn classification(image: ImageBuffer, class_id: impl Into<String>) -> Self {
        Self {
            image,
            label: Label::Class(class_id.into()),
        }
    }

    /// A detection sample
    pub fn detection(image: ImageBuffer, boxes: Vec<BoundingBox>) -> Self {
        Self {
            image,
            label: Label::Boxes(boxes),
        }
    }

    /// A sample without a structured label
    pub fn unlabeled(image: ImageBuffer) -> Self {
        Self {
            image,
            label: Label::None,
        }
    }
}

/// A labeled sample collection
///
/// Checks treat datasets as read-only. The only mutable attribute is the
/// optional display `name`, set by the caller before a run to label display
/// annotations.
#[derive(Debug, Clone)]
pub struct VisionData {
    task: TaskType,
    samples: Vec<Sample>,
    name: Option<String>,
}

impl VisionData {
    /// Create a dataset, validating label/task consistency
    pub fn new(task: TaskType, samples: Vec<Sample>) -> Result<Self> {
        for (index, sample) in samples.iter().enumerate() {
            let compatible = match (task, &sample.label) {
                (TaskType::Classification, Label::Class(_)) => true,
                (TaskType::ObjectDetection, Label::Boxes(_)) => true,
                (TaskType::Other, _) => true,
                _ => false,
            };
            if !compatible {
                return Err(Error::Value(format!(
                    "Sample {index} has a label incompatible with task type {task:?}."
                )));
            }
        }
        Ok(Self {
            task,
            samples,
            name: None,
        })
    }

    /// Task type of this dataset
    pub fn task(&self) -> TaskType {
        self.task
    }

    /// All samples, in insertion order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Display name, if the caller set one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the display name used to label display annotations
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The ordered set of class ids present in the labels
    ///
    /// Empty for custom-task datasets.
    pub fn classes(&self) -> BTreeSet<String> {
        let mut classes = BTreeSet::new();
        for sample in &self.samples {
            match &sample.label {
                Label::Class(class_id) => {
                    classes.insert(class_id.clone());
                }
                Label::Boxes(boxes) => {
                    for bbox in boxes {
                        classes.insert(bbox.class_id.clone());
                    }
                }
                Label::None => {}
            }
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_image() -> ImageBuffer {
        ImageBuffer::gray(2, 2, vec![0, 64, 128, 255]).unwrap()
    }

    #[test]
    fn test_label_task_mismatch_is_rejected() {
        let samples = vec![Sample::classification(tiny_image(), "cat")];
        let err = VisionData::new(TaskType::ObjectDetection, samples).unwrap_err();
        assert!(matches!(err, Error::Value(_)));
    }

    #[test]
    fn test_other_task_accepts_any_label() {
        let samples = vec![
            Sample::unlabeled(tiny_image()),
            Sample::classification(tiny_image(), "cat"),
        ];
        let data = VisionData::new(TaskType::Other, samples).unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_classes_classification() {
        let samples = vec![
            Sample::classification(tiny_image(), "3"),
            Sample::classification(tiny_image(), "1"),
            Sample::classification(tiny_image(), "3"),
        ];
        let data = VisionData::new(TaskType::Classification, samples).unwrap();
        let classes: Vec<String> = data.classes().into_iter().collect();
        assert_eq!(classes, vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_classes_detection() {
        let boxes = vec![
            BoundingBox::new("person", 0.0, 0.0, 1.0, 1.0),
            BoundingBox::new("car", 1.0, 1.0, 1.0, 1.0),
        ];
        let samples = vec![
            Sample::detection(tiny_image(), boxes),
            Sample::detection(tiny_image(), Vec::new()),
        ];
        let data = VisionData::new(TaskType::ObjectDetection, samples).unwrap();
        assert!(data.classes().contains("person"));
        assert!(data.classes().contains("car"));
        assert_eq!(data.classes().len(), 2);
    }

    #[test]
    fn test_name_is_mutable() {
        let mut data = VisionData::new(TaskType::Other, vec![Sample::unlabeled(tiny_image())]).unwrap();
        assert_eq!(data.name(), None);
        data.set_name("Ref");
        assert_eq!(data.name(), Some("Ref"));
    }
}
