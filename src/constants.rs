//! Cross-cutting, shared constants.
//!
//! Scoring constants are the defaults of [`ScoringConfig`](crate::scoring::ScoringConfig);
//! tolerance constants back [`WordCategory::tolerance`](crate::thesaurus::WordCategory::tolerance).
//!
//! # Score Invariants
//!
//! Every non-exact path must stay strictly below `1.0` so that a word score of
//! exactly `1.0` identifies an exact string match. [`ScoringConfig::validate`]
//! enforces this for runtime overrides.
//!
//! [`ScoringConfig::validate`]: crate::scoring::ScoringConfig::validate

/// Score for two identical surface forms.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Score for two words that share a full thesaurus code.
pub const DEFAULT_SYNONYM_SCORE: f64 = 0.9;

/// Multiplier applied to the character-overlap ratio.
pub const DEFAULT_OVERLAP_WEIGHT: f64 = 0.8;

/// The overlap ratio must be strictly greater than this to score.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;

/// Share of the remaining headroom granted when both words have the same category.
pub const DEFAULT_CATEGORY_BOOST: f64 = 0.1;

/// Both words need at least this many characters for the overlap fallback.
pub const MIN_OVERLAP_CHARS: usize = 2;

pub const VERB_TOLERANCE: f64 = 0.3;
pub const NOUN_TOLERANCE: f64 = 0.4;
pub const ADJECTIVE_TOLERANCE: f64 = 0.5;
pub const ADVERB_TOLERANCE: f64 = 0.6;
pub const DEFAULT_TOLERANCE: f64 = 0.4;

/// Largest penalty applied to a position difference inside the tolerance window.
pub const IN_TOLERANCE_MAX_PENALTY: f64 = 0.2;

/// Decay rate of the Gaussian falloff outside the tolerance window.
pub const OUT_OF_TOLERANCE_DECAY: f64 = 1.5;

/// Minimum number of characters in a thesaurus code (levels 1-5).
pub const SENSE_CODE_MIN_LEN: usize = 7;

/// Default location of the thesaurus file.
pub const DEFAULT_DICT_PATH: &str = "data/cilin.txt";

/// Default bound on concurrent batch workers.
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_exact_paths_stay_below_exact() {
        let boosted_synonym =
            DEFAULT_SYNONYM_SCORE + (EXACT_MATCH_SCORE - DEFAULT_SYNONYM_SCORE) * DEFAULT_CATEGORY_BOOST;
        let boosted_overlap =
            DEFAULT_OVERLAP_WEIGHT + (EXACT_MATCH_SCORE - DEFAULT_OVERLAP_WEIGHT) * DEFAULT_CATEGORY_BOOST;

        assert!(boosted_synonym < EXACT_MATCH_SCORE);
        assert!(boosted_overlap < EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_tolerance_ordering() {
        assert!(VERB_TOLERANCE < NOUN_TOLERANCE);
        assert!(NOUN_TOLERANCE < ADJECTIVE_TOLERANCE);
        assert!(ADJECTIVE_TOLERANCE < ADVERB_TOLERANCE);
    }
}
