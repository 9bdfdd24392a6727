//! Semantic F1 library crate (used by the `semf1` binary and integration tests).
//!
//! Scores a predicted answer against a reference answer with three F1
//! variants:
//!
//! - **exact**: identical tokens only
//! - **semantic**: synonyms and character overlap earn partial credit
//! - **position-aware**: semantic credit discounted by how far apart matched
//!   tokens sit in their sequences
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Thesaurus`], [`SenseCode`], [`WordCategory`] - Coded synonym dictionary
//! - [`SimilarityScorer`], [`TextSimilarity`], [`SimilarityReport`] - Scoring
//! - [`Tokenizer`], [`JiebaTokenizer`], [`PreSegmentedTokenizer`] - Segmentation
//!
//! ## Batch
//! - [`BatchScorer`], [`parse_rows`] - Bounded concurrent scoring of many rows
//!
//! ## Configuration
//! - [`Config`] - Paths and worker bounds from `SEMF1_*` variables
//! - [`ScoringConfig`] - Scoring constants
//!
//! ## Test/Mock Support
//! [`MockTokenizer`](tokenize::MockTokenizer) is available behind
//! `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use semf1::{PreSegmentedTokenizer, SimilarityScorer, Thesaurus};
//!
//! let thesaurus = Arc::new(Thesaurus::parse("Ga01A01= 快乐 高兴\n"));
//! let scorer = SimilarityScorer::new(thesaurus, PreSegmentedTokenizer);
//!
//! let similarity = scorer.score_one("我 很 快乐", "我 很 高兴");
//! assert!(similarity.semantic_f1 > similarity.f1);
//! ```

pub mod batch;
pub mod config;
pub mod constants;
pub mod scoring;
pub mod thesaurus;
pub mod tokenize;

pub use batch::{BatchMetric, BatchScorer, RowScore, ScoreRow, parse_rows};
pub use config::{Config, ConfigError};
pub use scoring::{
    AlignedPair, MatchAccumulator, MatchKind, MetricTriple, PairMatch, PairwiseScorer,
    ScoringConfig, ScoringError, SimilarityReport, SimilarityScorer, TextSimilarity, Token,
    WordMatch, align, character_overlap, f1_score, position_score, safe_div, score_pair,
};
pub use thesaurus::{
    LoadOutcome, LoadStats, SenseCode, Thesaurus, ThesaurusError, ThesaurusResult, WordCategory,
};
#[cfg(any(test, feature = "mock"))]
pub use tokenize::MockTokenizer;
pub use tokenize::{JiebaTokenizer, PreSegmentedTokenizer, TokenizeError, Tokenizer};
