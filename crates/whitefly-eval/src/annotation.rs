//! Ground-truth annotation loading.
//!
//! Annotation files carry the boxes as the labelling tool wrote them:
//! floating-point coordinates and an image-level `bad` flag for photographs
//! the annotator could not label reliably (blur, occlusion). Coordinates
//! are rounded and clamped here, once, so the rest of the pipeline only
//! ever sees validated integer boxes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use whitefly_core::{GroundTruthBox, InvalidBoxError};

#[derive(thiserror::Error, Debug)]
pub enum AnnotationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidBox(#[from] InvalidBoxError),
}

/// One box as stored on disk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// On-disk annotation schema for one image.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnnotationFile {
    #[serde(default)]
    pub bad: bool,
    #[serde(default)]
    pub boxes: Vec<RawBox>,
}

/// Validated ground truth for one image.
#[derive(Clone, Debug, Default)]
pub struct ImageAnnotation {
    pub boxes: Vec<GroundTruthBox>,
    pub bad: bool,
}

impl AnnotationFile {
    /// Load the JSON annotation for one image from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, AnnotationError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Round coordinates to integers and validate each box.
    pub fn into_annotation(self) -> Result<ImageAnnotation, AnnotationError> {
        let boxes = self
            .boxes
            .into_iter()
            .map(|b| {
                GroundTruthBox::new(
                    b.xmin.round() as u32,
                    b.xmax.round() as u32,
                    b.ymin.round() as u32,
                    b.ymax.round() as u32,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ImageAnnotation {
            boxes,
            bad: self.bad,
        })
    }
}

/// Load and validate the annotation for one image.
pub fn load_annotation(path: impl AsRef<Path>) -> Result<ImageAnnotation, AnnotationError> {
    AnnotationFile::load_json(path)?.into_annotation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rounds_and_clamps_coordinates() {
        let file = AnnotationFile {
            bad: false,
            boxes: vec![RawBox {
                xmin: 0.4,
                xmax: 10.5,
                ymin: 2.6,
                ymax: 12.2,
            }],
        };
        let annotation = file.into_annotation().unwrap();
        let b = annotation.boxes[0];
        // 0.4 rounds to 0, then clamps to 1; 10.5 rounds half away from zero.
        assert_eq!((b.xmin, b.xmax, b.ymin, b.ymax), (1, 11, 3, 12));
    }

    #[test]
    fn inverted_box_fails_validation() {
        let file = AnnotationFile {
            bad: false,
            boxes: vec![RawBox {
                xmin: 30.0,
                xmax: 10.0,
                ymin: 1.0,
                ymax: 5.0,
            }],
        };
        assert!(matches!(
            file.into_annotation(),
            Err(AnnotationError::InvalidBox(_))
        ));
    }

    #[test]
    fn missing_fields_default_to_usable_empty() {
        let file: AnnotationFile = serde_json::from_str("{}").unwrap();
        let annotation = file.into_annotation().unwrap();
        assert!(!annotation.bad);
        assert!(annotation.boxes.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{"bad": true, "boxes": [{{"xmin": 1, "xmax": 2, "ymin": 3, "ymax": 4}}]}}"#
        )
        .unwrap();
        let annotation = load_annotation(tmp.path()).unwrap();
        assert!(annotation.bad);
        assert_eq!(annotation.boxes.len(), 1);
    }
}
