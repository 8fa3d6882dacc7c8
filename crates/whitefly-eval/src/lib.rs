//! Detection-to-ground-truth matching and accuracy accounting.
//!
//! One image at a time: detected centre points are greedily matched against
//! annotated bounding boxes to produce true/false positive and false
//! negative counts. Per-image counts accumulate into dataset-wide
//! precision, recall and F-score.

mod accuracy;
mod annotation;
mod report;
mod scorer;

pub use accuracy::{AccuracyAccumulator, AccuracyReport, MetricError};
pub use annotation::{load_annotation, AnnotationError, AnnotationFile, ImageAnnotation, RawBox};
pub use report::{format_counts, format_metrics};
pub use scorer::{score_annotated, score_detections, BadAnnotationError, MatchCounts};
