//! Word-vs-word and position-vs-position scores.

use crate::constants::{EXACT_MATCH_SCORE, IN_TOLERANCE_MAX_PENALTY, OUT_OF_TOLERANCE_DECAY};
use crate::thesaurus::Thesaurus;

use super::config::ScoringConfig;
use super::types::{MatchKind, Token, WordMatch};

/// Scores word pairs against a thesaurus.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseScorer<'a> {
    thesaurus: &'a Thesaurus,
    config: &'a ScoringConfig,
}

impl<'a> PairwiseScorer<'a> {
    pub fn new(thesaurus: &'a Thesaurus, config: &'a ScoringConfig) -> Self {
        Self { thesaurus, config }
    }

    pub fn thesaurus(&self) -> &'a Thesaurus {
        self.thesaurus
    }

    /// Scores `a` against `b` in `[0, 1]`, resolving both categories.
    pub fn word_score(&self, a: &str, b: &str) -> f64 {
        let a = Token::new(a, 0, self.thesaurus.category(a));
        let b = Token::new(b, 0, self.thesaurus.category(b));
        self.match_tokens(&a, &b).map_or(0.0, |m| m.score)
    }

    /// Scores two tokens whose categories are already resolved.
    ///
    /// Returns `None` when no rule gives a positive score. A positive
    /// non-exact score is raised by `category_boost` of its headroom when
    /// both tokens share a category.
    pub fn match_tokens(&self, a: &Token<'_>, b: &Token<'_>) -> Option<WordMatch> {
        let mut word_match = self.base_match(a.text, b.text)?;

        if a.category == b.category && word_match.score < EXACT_MATCH_SCORE {
            word_match.score += (EXACT_MATCH_SCORE - word_match.score) * self.config.category_boost;
        }

        Some(word_match)
    }

    fn base_match(&self, a: &str, b: &str) -> Option<WordMatch> {
        if a == b {
            return Some(WordMatch {
                score: EXACT_MATCH_SCORE,
                kind: MatchKind::Exact,
            });
        }

        if self.thesaurus.is_synonym(a, b) {
            return Some(WordMatch {
                score: self.config.synonym_score,
                kind: MatchKind::Synonym,
            });
        }

        let min_chars = self.config.min_overlap_chars;
        if a.chars().count() >= min_chars && b.chars().count() >= min_chars {
            let overlap = character_overlap(a, b);
            if overlap > self.config.overlap_threshold {
                return Some(WordMatch {
                    score: overlap * self.config.overlap_weight,
                    kind: MatchKind::Overlap,
                });
            }
        }

        None
    }
}

/// Share of `a`'s characters that occur anywhere in `b`, over the longer length.
///
/// Characters of `b` are not consumed, so repeated characters in `a` each count.
pub fn character_overlap(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = len_a.max(len_b);
    if longest == 0 {
        return 0.0;
    }

    let common = a.chars().filter(|c| b.contains(*c)).count();
    common as f64 / longest as f64
}

/// Closeness of two normalized positions in `(0, 1]`.
///
/// Inside the tolerance window the score falls linearly to `0.8`; outside it
/// decays as `exp(-1.5 * excess^2)`.
pub fn position_score(pos_a: f64, pos_b: f64, tolerance: f64) -> f64 {
    let diff = (pos_a - pos_b).abs();

    if diff <= tolerance {
        if tolerance <= 0.0 {
            return 1.0;
        }
        return 1.0 - (diff / tolerance) * IN_TOLERANCE_MAX_PENALTY;
    }

    let excess = diff - tolerance;
    (-OUT_OF_TOLERANCE_DECAY * excess * excess).exp()
}

/// Position divided by sequence length; `0` for an empty sequence.
pub fn normalized_position(position: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    position as f64 / len as f64
}
