//! Greedy one-to-one alignment of actual tokens against predicted tokens.
//!
//! Actual tokens are visited left to right. Each one takes the unconsumed
//! predicted token with the highest `word_score * position_score`; the first
//! candidate wins ties. Decisions are never revisited, so the result is not a
//! global optimum, and scores depend on that exact order.

use tracing::debug;

use super::pairwise::{PairwiseScorer, normalized_position, position_score};
use super::types::{AlignedPair, MatchAccumulator, Token};

struct Candidate {
    index: usize,
    pair: AlignedPair,
    rank: f64,
}

/// Aligns `actual` against `predicted` and returns the running totals.
pub fn align(
    scorer: &PairwiseScorer<'_>,
    actual: &[Token<'_>],
    predicted: &[Token<'_>],
) -> MatchAccumulator {
    let mut accumulator = MatchAccumulator::default();
    let mut consumed = vec![false; predicted.len()];

    for (actual_index, actual_token) in actual.iter().enumerate() {
        let tolerance = actual_token.category.tolerance();
        let actual_pos = normalized_position(actual_token.position, actual.len());

        let mut best: Option<Candidate> = None;

        for (predicted_index, predicted_token) in predicted.iter().enumerate() {
            if consumed[predicted_index] {
                continue;
            }

            let Some(word_match) = scorer.match_tokens(actual_token, predicted_token) else {
                continue;
            };

            let predicted_pos = normalized_position(predicted_token.position, predicted.len());
            let pos_score = position_score(actual_pos, predicted_pos, tolerance);
            let rank = word_match.score * pos_score;

            if best.as_ref().is_none_or(|b| rank > b.rank) {
                best = Some(Candidate {
                    index: predicted_index,
                    pair: AlignedPair {
                        actual_index,
                        predicted_index,
                        word_score: word_match.score,
                        position_score: pos_score,
                        kind: word_match.kind,
                    },
                    rank,
                });
            }
        }

        if let Some(candidate) = best {
            consumed[candidate.index] = true;
            accumulator.record(candidate.pair);
        }
    }

    debug!(
        actual_tokens = actual.len(),
        predicted_tokens = predicted.len(),
        matched = accumulator.matched(),
        exact = accumulator.exact_matches,
        semantic = accumulator.semantic_score,
        position_weighted = accumulator.position_score,
        "Aligned token sequences"
    );

    accumulator
}
