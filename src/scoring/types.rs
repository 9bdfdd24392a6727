use serde::{Deserialize, Serialize};

use crate::thesaurus::WordCategory;

/// A segmented word, its 0-based index in its sequence, and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub position: usize,
    pub category: WordCategory,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, position: usize, category: WordCategory) -> Self {
        Self {
            text,
            position,
            category,
        }
    }
}

/// Which rule produced a word score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Identical surface forms.
    Exact,
    /// Same full thesaurus code.
    Synonym,
    /// Shared characters above the overlap threshold.
    Overlap,
}

/// Score of one word against another (always > 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub score: f64,
    pub kind: MatchKind,
}

impl WordMatch {
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

/// One committed pairing from the alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Index into the actual sequence.
    pub actual_index: usize,
    /// Index into the predicted sequence.
    pub predicted_index: usize,
    pub word_score: f64,
    pub position_score: f64,
    pub kind: MatchKind,
}

impl AlignedPair {
    /// `word_score * position_score`, the rank used during selection.
    pub fn weighted_score(&self) -> f64 {
        self.word_score * self.position_score
    }
}

/// Running totals of one alignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAccumulator {
    /// Pairs whose words are identical.
    pub exact_matches: usize,
    /// Sum of word scores over all pairs.
    pub semantic_score: f64,
    /// Sum of `word_score * position_score` over all pairs.
    pub position_score: f64,
    /// Committed pairs in actual-sequence order.
    pub pairs: Vec<AlignedPair>,
}

impl MatchAccumulator {
    pub fn record(&mut self, pair: AlignedPair) {
        if pair.kind == MatchKind::Exact {
            self.exact_matches += 1;
        }
        self.semantic_score += pair.word_score;
        self.position_score += pair.weighted_score();
        self.pairs.push(pair);
    }

    pub fn matched(&self) -> usize {
        self.pairs.len()
    }
}

/// Precision, recall and F1 of one similarity variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTriple {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// The five headline numbers for one text pair.
///
/// `precision` and `recall` belong to the exact-match variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSimilarity {
    pub f1: f64,
    pub precision: f64,
    pub recall: f64,
    pub semantic_f1: f64,
    pub position_aware_f1: f64,
}

/// All three metric variants plus the alignment that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub exact: MetricTriple,
    pub semantic: MetricTriple,
    pub position_aware: MetricTriple,
    pub actual_tokens: usize,
    pub predicted_tokens: usize,
    pub pairs: Vec<AlignedPair>,
}

impl SimilarityReport {
    pub fn similarity(&self) -> TextSimilarity {
        TextSimilarity {
            f1: self.exact.f1,
            precision: self.exact.precision,
            recall: self.exact.recall,
            semantic_f1: self.semantic.f1,
            position_aware_f1: self.position_aware.f1,
        }
    }
}

/// Result of the first-token accuracy check: `matches` is `1` or `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMatch {
    pub matches: u8,
}

impl PairMatch {
    pub fn is_match(&self) -> bool {
        self.matches == 1
    }
}
