//! Batch scoring of reference/prediction rows.
//!
//! Rows are scored on the blocking pool, at most `max_workers` at a time.
//! Results come back in input order.

#[cfg(test)]
mod tests;

use std::io::BufRead;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::scoring::{PairMatch, ScoringError, SimilarityScorer, TextSimilarity};
use crate::tokenize::Tokenizer;

/// Which metric a batch computes per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchMetric {
    /// Exact / semantic / position-aware F1.
    #[default]
    Similarity,
    /// First-token accuracy over full-mode segmentation.
    Accuracy,
}

/// One input row; `index` is its line number in the source (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub index: usize,
    pub actual: String,
    pub predicted: String,
}

impl ScoreRow {
    pub fn new(index: usize, actual: impl Into<String>, predicted: impl Into<String>) -> Self {
        Self {
            index,
            actual: actual.into(),
            predicted: predicted.into(),
        }
    }
}

/// Scored row. Exactly one of `similarity` / `accuracy` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowScore {
    pub index: usize,
    pub actual: String,
    pub predicted: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub similarity: Option<TextSimilarity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub accuracy: Option<PairMatch>,
}

/// Reads tab-separated `actual<TAB>predicted` rows.
///
/// Rows with fewer than two columns are skipped; cells are trimmed; extra
/// columns are ignored.
pub fn parse_rows<R: BufRead>(reader: R, skip_header: bool) -> std::io::Result<Vec<ScoreRow>> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if skip_header && index == 0 {
            continue;
        }

        let mut cells = line.split('\t');
        let (Some(actual), Some(predicted)) = (cells.next(), cells.next()) else {
            debug!(line = index + 1, "Skipping row with fewer than two columns");
            continue;
        };

        rows.push(ScoreRow::new(index, actual.trim(), predicted.trim()));
    }

    Ok(rows)
}

/// Scores rows concurrently with a bounded number of workers.
pub struct BatchScorer<T> {
    scorer: Arc<SimilarityScorer<T>>,
    permits: Arc<Semaphore>,
    max_workers: usize,
}

impl<T> std::fmt::Debug for BatchScorer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchScorer")
            .field("scorer", &self.scorer)
            .field("max_workers", &self.max_workers)
            .finish()
    }
}

impl<T: Tokenizer + 'static> BatchScorer<T> {
    /// `max_workers` is clamped to at least 1.
    pub fn new(scorer: Arc<SimilarityScorer<T>>, max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            scorer,
            permits: Arc::new(Semaphore::new(max_workers)),
            max_workers,
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub fn scorer(&self) -> &SimilarityScorer<T> {
        &self.scorer
    }

    /// Scores every row and returns the results in input order.
    pub async fn score_rows(
        &self,
        rows: Vec<ScoreRow>,
        metric: BatchMetric,
    ) -> Result<Vec<RowScore>, ScoringError> {
        let started = Instant::now();
        let total = rows.len();
        let mut handles = Vec::with_capacity(total);

        for row in rows {
            let permit = Arc::clone(&self.permits)
                .acquire_owned()
                .await
                .map_err(|e| ScoringError::WorkerFailed {
                    reason: e.to_string(),
                })?;
            let scorer = Arc::clone(&self.scorer);

            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                score_row(&scorer, row, metric)
            }));
        }

        let mut results = Vec::with_capacity(total);
        for handle in handles {
            results.push(handle.await?);
        }

        info!(
            rows = total,
            workers = self.max_workers,
            ?metric,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Batch scored"
        );

        Ok(results)
    }
}

fn score_row<T: Tokenizer>(scorer: &SimilarityScorer<T>, row: ScoreRow, metric: BatchMetric) -> RowScore {
    let (similarity, accuracy) = match metric {
        BatchMetric::Similarity => (Some(scorer.score_one(&row.actual, &row.predicted)), None),
        BatchMetric::Accuracy => (None, Some(scorer.accuracy(&row.actual, &row.predicted))),
    };

    RowScore {
        index: row.index,
        actual: row.actual,
        predicted: row.predicted,
        similarity,
        accuracy,
    }
}
