use crate::accuracy::AccuracyAccumulator;
use crate::scorer::MatchCounts;

/// Render counts in the conventional evaluation-harness form.
pub fn format_counts(counts: &MatchCounts) -> String {
    format!(
        "TP={}, FP={}, FN={}",
        counts.true_positives, counts.false_positives, counts.false_negatives
    )
}

fn metric_or_undefined(value: Result<f64, crate::accuracy::MetricError>) -> String {
    match value {
        Ok(v) => format!("{v:.3}"),
        Err(_) => "undefined".to_string(),
    }
}

/// Render the summary line, printing `undefined` for metrics whose
/// denominator is zero instead of a misleading 0.000.
pub fn format_metrics(acc: &AccuracyAccumulator) -> String {
    format!(
        "Precision={}, Recall={}, F-score={}",
        metric_or_undefined(acc.precision()),
        metric_or_undefined(acc.recall()),
        metric_or_undefined(acc.f_score())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_line_matches_reference_format() {
        let counts = MatchCounts {
            true_positives: 8,
            false_positives: 2,
            false_negatives: 1,
        };
        assert_eq!(format_counts(&counts), "TP=8, FP=2, FN=1");
    }

    #[test]
    fn metrics_line_matches_reference_format() {
        let mut acc = AccuracyAccumulator::new();
        acc.record(MatchCounts {
            true_positives: 8,
            false_positives: 2,
            false_negatives: 1,
        });
        assert_eq!(
            format_metrics(&acc),
            "Precision=0.800, Recall=0.889, F-score=0.842"
        );
    }

    #[test]
    fn undefined_metrics_render_as_text() {
        let acc = AccuracyAccumulator::new();
        assert_eq!(
            format_metrics(&acc),
            "Precision=undefined, Recall=undefined, F-score=undefined"
        );
    }
}
