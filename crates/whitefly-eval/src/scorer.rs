use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use whitefly_core::{GroundTruthBox, PixelPoint};

use crate::annotation::ImageAnnotation;

/// Per-image detection outcome counts. Combined additively across a dataset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchCounts {
    pub true_positives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl Add for MatchCounts {
    type Output = MatchCounts;

    fn add(self, rhs: MatchCounts) -> MatchCounts {
        MatchCounts {
            true_positives: self.true_positives + rhs.true_positives,
            false_positives: self.false_positives + rhs.false_positives,
            false_negatives: self.false_negatives + rhs.false_negatives,
        }
    }
}

impl AddAssign for MatchCounts {
    fn add_assign(&mut self, rhs: MatchCounts) {
        *self = *self + rhs;
    }
}

/// The annotation marks this image as unusable; it must be excluded from
/// scoring rather than treated as having zero boxes.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[error("image annotation is flagged bad; excluded from scoring")]
pub struct BadAnnotationError;

/// Greedily match detections against ground-truth boxes for one image.
///
/// Detections are processed strictly in input order; each claims the first
/// remaining box (in box-list order) that contains it, and a claimed box is
/// taken out of play. The first detection wins a contested box. This
/// tie-break is deliberate and must stay: replacing it with an optimal
/// assignment changes the counts on overlapping annotations.
pub fn score_detections(
    detections: &[PixelPoint],
    boxes: &[GroundTruthBox],
) -> MatchCounts {
    let mut counts = MatchCounts::default();
    // Indices of boxes not yet claimed by an earlier detection.
    let mut remaining: Vec<usize> = (0..boxes.len()).collect();

    for &point in detections {
        let hit = remaining
            .iter()
            .position(|&bi| boxes[bi].contains(point));
        match hit {
            Some(slot) => {
                counts.true_positives += 1;
                remaining.remove(slot);
            }
            None => counts.false_positives += 1,
        }
    }

    counts.false_negatives = remaining.len() as u64;
    counts
}

/// Score one annotated image, refusing images flagged bad.
pub fn score_annotated(
    detections: &[PixelPoint],
    annotation: &ImageAnnotation,
) -> Result<MatchCounts, BadAnnotationError> {
    if annotation.bad {
        return Err(BadAnnotationError);
    }
    Ok(score_detections(detections, &annotation.boxes))
}
