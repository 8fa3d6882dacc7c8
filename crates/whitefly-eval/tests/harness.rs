//! End-to-end evaluation flow over a synthetic multi-image dataset.

use approx::assert_relative_eq;
use whitefly_core::{GroundTruthBox, PixelPoint};
use whitefly_eval::{
    score_annotated, AccuracyAccumulator, ImageAnnotation, MetricError,
};

fn gt(xmin: u32, xmax: u32, ymin: u32, ymax: u32) -> GroundTruthBox {
    GroundTruthBox::new(xmin, xmax, ymin, ymax).unwrap()
}

#[test]
fn dataset_accumulation_skips_bad_images() {
    let images = vec![
        // 2 TP, 1 FP
        (
            ImageAnnotation {
                boxes: vec![gt(10, 20, 10, 20), gt(30, 40, 30, 40)],
                bad: false,
            },
            vec![
                PixelPoint::new(12, 12),
                PixelPoint::new(35, 35),
                PixelPoint::new(90, 90),
            ],
        ),
        // flagged bad: would add counts if wrongly included
        (
            ImageAnnotation {
                boxes: vec![gt(1, 100, 1, 100)],
                bad: true,
            },
            vec![PixelPoint::new(50, 50)],
        ),
        // 1 FN
        (
            ImageAnnotation {
                boxes: vec![gt(60, 70, 60, 70)],
                bad: false,
            },
            vec![],
        ),
    ];

    let mut acc = AccuracyAccumulator::new();
    let mut skipped = 0;
    for (annotation, detections) in &images {
        match score_annotated(detections, annotation) {
            Ok(counts) => acc.record(counts),
            Err(_) => skipped += 1,
        }
    }

    assert_eq!(skipped, 1);
    let totals = acc.counts();
    assert_eq!(totals.true_positives, 2);
    assert_eq!(totals.false_positives, 1);
    assert_eq!(totals.false_negatives, 1);

    let report = acc.report().unwrap();
    assert_relative_eq!(report.precision(), 2.0 / 3.0);
    assert_relative_eq!(report.recall(), 2.0 / 3.0);
    assert_relative_eq!(report.f_score(), 2.0 / 3.0);
}

#[test]
fn all_bad_dataset_leaves_metrics_undefined() {
    let annotation = ImageAnnotation {
        boxes: vec![gt(1, 10, 1, 10)],
        bad: true,
    };
    let mut acc = AccuracyAccumulator::new();
    if let Ok(counts) = score_annotated(&[PixelPoint::new(5, 5)], &annotation) {
        acc.record(counts);
    }
    assert_eq!(acc.precision(), Err(MetricError::UndefinedPrecision));
    assert_eq!(acc.recall(), Err(MetricError::UndefinedRecall));
}
