//! Precision / recall / F1 from alignment totals.

use super::types::{MatchAccumulator, MetricTriple, SimilarityReport, TextSimilarity};

/// `a / b`, or `0` when `b` is zero.
#[inline]
pub fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 { 0.0 } else { a / b }
}

/// Harmonic mean of precision and recall, each capped at `1.0`.
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    let precision = precision.min(1.0);
    let recall = recall.min(1.0);
    if precision + recall == 0.0 {
        return 0.0;
    }
    2.0 * precision * recall / (precision + recall)
}

impl MetricTriple {
    /// Builds a triple from a matched total and the two sequence lengths.
    pub fn from_total(matched: f64, total_actual: usize, total_predicted: usize) -> Self {
        let precision = safe_div(matched, total_predicted as f64);
        let recall = safe_div(matched, total_actual as f64);
        Self {
            precision,
            recall,
            f1: f1_score(precision, recall),
        }
    }
}

impl SimilarityReport {
    /// Turns alignment totals into the three metric variants.
    pub fn from_accumulator(
        accumulator: MatchAccumulator,
        total_actual: usize,
        total_predicted: usize,
    ) -> Self {
        Self {
            exact: MetricTriple::from_total(
                accumulator.exact_matches as f64,
                total_actual,
                total_predicted,
            ),
            semantic: MetricTriple::from_total(
                accumulator.semantic_score,
                total_actual,
                total_predicted,
            ),
            position_aware: MetricTriple::from_total(
                accumulator.position_score,
                total_actual,
                total_predicted,
            ),
            actual_tokens: total_actual,
            predicted_tokens: total_predicted,
            pairs: accumulator.pairs,
        }
    }
}

impl TextSimilarity {
    pub fn from_accumulator(
        accumulator: MatchAccumulator,
        total_actual: usize,
        total_predicted: usize,
    ) -> Self {
        SimilarityReport::from_accumulator(accumulator, total_actual, total_predicted).similarity()
    }
}
