use crate::constants::{
    DEFAULT_CATEGORY_BOOST, DEFAULT_OVERLAP_THRESHOLD, DEFAULT_OVERLAP_WEIGHT,
    DEFAULT_SYNONYM_SCORE, MIN_OVERLAP_CHARS,
};

use super::error::ScoringError;

/// Tunable constants of the pairwise scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Score for thesaurus synonyms. Default: `0.9`.
    pub synonym_score: f64,

    /// Multiplier for the character-overlap ratio. Default: `0.8`.
    pub overlap_weight: f64,

    /// Overlap ratios at or below this score zero. Default: `0.5`.
    pub overlap_threshold: f64,

    /// Share of the headroom added when categories match. Default: `0.1`.
    pub category_boost: f64,

    /// Minimum character length of both words for the overlap fallback. Default: `2`.
    pub min_overlap_chars: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            synonym_score: DEFAULT_SYNONYM_SCORE,
            overlap_weight: DEFAULT_OVERLAP_WEIGHT,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            category_boost: DEFAULT_CATEGORY_BOOST,
            min_overlap_chars: MIN_OVERLAP_CHARS,
        }
    }
}

impl ScoringConfig {
    const ENV_SYNONYM_SCORE: &'static str = "SEMF1_SYNONYM_SCORE";
    const ENV_OVERLAP_WEIGHT: &'static str = "SEMF1_OVERLAP_WEIGHT";
    const ENV_OVERLAP_THRESHOLD: &'static str = "SEMF1_OVERLAP_THRESHOLD";
    const ENV_CATEGORY_BOOST: &'static str = "SEMF1_CATEGORY_BOOST";

    pub fn with_synonym_score(mut self, score: f64) -> Self {
        self.synonym_score = score;
        self
    }

    pub fn with_overlap_weight(mut self, weight: f64) -> Self {
        self.overlap_weight = weight;
        self
    }

    pub fn with_overlap_threshold(mut self, threshold: f64) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    pub fn with_category_boost(mut self, boost: f64) -> Self {
        self.category_boost = boost;
        self
    }

    /// Checks that every non-exact path scores strictly below `1.0`.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let open_unit = |name: &str, value: f64| {
            if value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(ScoringError::InvalidConfig {
                    reason: format!("{name} must be in (0, 1), got {value}"),
                })
            }
        };
        let half_open_unit = |name: &str, value: f64| {
            if (0.0..1.0).contains(&value) {
                Ok(())
            } else {
                Err(ScoringError::InvalidConfig {
                    reason: format!("{name} must be in [0, 1), got {value}"),
                })
            }
        };

        open_unit("synonym_score", self.synonym_score)?;
        open_unit("overlap_weight", self.overlap_weight)?;
        half_open_unit("overlap_threshold", self.overlap_threshold)?;
        half_open_unit("category_boost", self.category_boost)?;

        if self.min_overlap_chars == 0 {
            return Err(ScoringError::InvalidConfig {
                reason: "min_overlap_chars must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Loads overrides from `SEMF1_*` variables; unparsable values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            synonym_score: parse_f64_from_env(Self::ENV_SYNONYM_SCORE, defaults.synonym_score),
            overlap_weight: parse_f64_from_env(Self::ENV_OVERLAP_WEIGHT, defaults.overlap_weight),
            overlap_threshold: parse_f64_from_env(
                Self::ENV_OVERLAP_THRESHOLD,
                defaults.overlap_threshold,
            ),
            category_boost: parse_f64_from_env(Self::ENV_CATEGORY_BOOST, defaults.category_boost),
            min_overlap_chars: defaults.min_overlap_chars,
        }
    }
}

fn parse_f64_from_env(var_name: &str, default: f64) -> f64 {
    std::env::var(var_name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
