//! Exact, synonym-aware and position-aware F1 for a pair of short texts.
//!
//! The pipeline for one pair:
//!
//! 1. The [`Tokenizer`](crate::tokenize::Tokenizer) segments both texts.
//! 2. Every token is tagged with a [`WordCategory`](crate::thesaurus::WordCategory).
//! 3. [`align`] greedily pairs actual tokens with predicted tokens using
//!    [`PairwiseScorer`] (word score) and [`position_score`].
//! 4. The [`MatchAccumulator`] totals become three precision/recall/F1 triples.
//!
//! # Word scores
//!
//! | Rule | Score |
//! |------|-------|
//! | identical | `1.0` |
//! | same full thesaurus code | `0.9` |
//! | character overlap `r > 0.5` (both words ≥ 2 chars) | `0.8 * r` |
//! | same category, non-exact | `s + (1 - s) * 0.1` |
//!
//! All constants live in [`ScoringConfig`].

pub mod config;
pub mod error;
pub mod matcher;
pub mod metrics;
pub mod pairwise;
pub mod scorer;
pub mod types;


pub use config::ScoringConfig;
pub use error::ScoringError;
pub use matcher::align;
pub use metrics::{f1_score, safe_div};
pub use pairwise::{PairwiseScorer, character_overlap, normalized_position, position_score};
pub use scorer::{SimilarityScorer, score_pair};
pub use types::{
    AlignedPair, MatchAccumulator, MatchKind, MetricTriple, PairMatch, SimilarityReport,
    TextSimilarity, Token, WordMatch,
};
