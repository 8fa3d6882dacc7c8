use serde::Serialize;

use crate::scorer::MatchCounts;

/// A derived metric has a zero denominator.
///
/// Distinct from a genuine 0.0 score: with no detections at all, precision
/// is not zero, it is meaningless, and callers report it as such.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum MetricError {
    #[error("precision undefined: no detections (TP + FP = 0)")]
    UndefinedPrecision,
    #[error("recall undefined: no ground-truth boxes (TP + FN = 0)")]
    UndefinedRecall,
    #[error("F-score undefined: precision + recall = 0")]
    UndefinedFScore,
}

/// Dataset-wide accuracy summary.
///
/// Only produced by [`AccuracyAccumulator::report`], so the derived metrics
/// always agree with the counts they were computed from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AccuracyReport {
    counts: MatchCounts,
    precision: f64,
    recall: f64,
    f_score: f64,
}

impl AccuracyReport {
    pub fn counts(&self) -> MatchCounts {
        self.counts
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn recall(&self) -> f64 {
        self.recall
    }

    pub fn f_score(&self) -> f64 {
        self.f_score
    }
}

/// Running accumulator over per-image match counts.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccuracyAccumulator {
    totals: MatchCounts,
}

impl AccuracyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one image's counts into the running totals.
    pub fn record(&mut self, counts: MatchCounts) {
        self.totals += counts;
    }

    pub fn counts(&self) -> MatchCounts {
        self.totals
    }

    /// TP / (TP + FP).
    pub fn precision(&self) -> Result<f64, MetricError> {
        let denom = self.totals.true_positives + self.totals.false_positives;
        if denom == 0 {
            return Err(MetricError::UndefinedPrecision);
        }
        Ok(self.totals.true_positives as f64 / denom as f64)
    }

    /// TP / (TP + FN).
    pub fn recall(&self) -> Result<f64, MetricError> {
        let denom = self.totals.true_positives + self.totals.false_negatives;
        if denom == 0 {
            return Err(MetricError::UndefinedRecall);
        }
        Ok(self.totals.true_positives as f64 / denom as f64)
    }

    /// Harmonic mean of precision and recall.
    pub fn f_score(&self) -> Result<f64, MetricError> {
        let p = self.precision()?;
        let r = self.recall()?;
        if p + r == 0.0 {
            return Err(MetricError::UndefinedFScore);
        }
        Ok(2.0 * p * r / (p + r))
    }

    /// Produce the full report, failing if any metric is undefined.
    pub fn report(&self) -> Result<AccuracyReport, MetricError> {
        Ok(AccuracyReport {
            counts: self.totals,
            precision: self.precision()?,
            recall: self.recall()?,
            f_score: self.f_score()?,
        })
    }
}
