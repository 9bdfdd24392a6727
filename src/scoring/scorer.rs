use std::sync::Arc;

use tracing::debug;

use crate::thesaurus::Thesaurus;
use crate::tokenize::Tokenizer;

use super::config::ScoringConfig;
use super::error::ScoringError;
use super::matcher::align;
use super::pairwise::PairwiseScorer;
use super::types::{PairMatch, SimilarityReport, TextSimilarity, Token};

/// Scores predicted answers against reference answers.
///
/// Holds no mutable state: one scorer can serve any number of threads.
pub struct SimilarityScorer<T> {
    thesaurus: Arc<Thesaurus>,
    tokenizer: T,
    config: ScoringConfig,
}

impl<T> std::fmt::Debug for SimilarityScorer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("thesaurus", &self.thesaurus)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Tokenizer> SimilarityScorer<T> {
    /// Creates a scorer with the default [`ScoringConfig`].
    pub fn new(thesaurus: Arc<Thesaurus>, tokenizer: T) -> Self {
        Self {
            thesaurus,
            tokenizer,
            config: ScoringConfig::default(),
        }
    }

    /// Creates a scorer with a custom config (validated).
    pub fn with_config(
        thesaurus: Arc<Thesaurus>,
        tokenizer: T,
        config: ScoringConfig,
    ) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self {
            thesaurus,
            tokenizer,
            config,
        })
    }

    pub fn thesaurus(&self) -> &Thesaurus {
        &self.thesaurus
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn pairwise(&self) -> PairwiseScorer<'_> {
        PairwiseScorer::new(&self.thesaurus, &self.config)
    }

    /// Segments both texts and scores them.
    pub fn score_one(&self, actual: &str, predicted: &str) -> TextSimilarity {
        self.score_detailed(actual, predicted).similarity()
    }

    /// Like [`score_one`](Self::score_one), keeping every metric and the alignment.
    pub fn score_detailed(&self, actual: &str, predicted: &str) -> SimilarityReport {
        let actual_words = self.tokenizer.tokenize(actual);
        let predicted_words = self.tokenizer.tokenize(predicted);

        debug!(
            actual_len = actual.len(),
            predicted_len = predicted.len(),
            actual_tokens = actual_words.len(),
            predicted_tokens = predicted_words.len(),
            "Scoring text pair"
        );

        self.score_tokens_detailed(&actual_words, &predicted_words)
    }

    /// Scores already segmented sequences.
    pub fn score_tokens<A, P>(&self, actual: &[A], predicted: &[P]) -> TextSimilarity
    where
        A: AsRef<str>,
        P: AsRef<str>,
    {
        self.score_tokens_detailed(actual, predicted).similarity()
    }

    pub fn score_tokens_detailed<A, P>(&self, actual: &[A], predicted: &[P]) -> SimilarityReport
    where
        A: AsRef<str>,
        P: AsRef<str>,
    {
        let actual_tokens = self.classify(actual);
        let predicted_tokens = self.classify(predicted);

        let accumulator = align(&self.pairwise(), &actual_tokens, &predicted_tokens);
        SimilarityReport::from_accumulator(accumulator, actual.len(), predicted.len())
    }

    /// First-token accuracy over full-mode segmentations of both texts.
    pub fn accuracy(&self, actual: &str, predicted: &str) -> PairMatch {
        let actual_words = self.tokenizer.tokenize_full(actual);
        let predicted_words = self.tokenizer.tokenize_full(predicted);
        score_pair(&actual_words, &predicted_words)
    }

    fn classify<'w, W: AsRef<str>>(&self, words: &'w [W]) -> Vec<Token<'w>> {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| {
                let text = word.as_ref();
                Token::new(text, position, self.thesaurus.category(text))
            })
            .collect()
    }
}

/// `1` if both sequences are non-empty and start with the same token, else `0`.
pub fn score_pair<A, P>(actual: &[A], predicted: &[P]) -> PairMatch
where
    A: AsRef<str>,
    P: AsRef<str>,
{
    let matches = match (actual.first(), predicted.first()) {
        (Some(a), Some(p)) if a.as_ref() == p.as_ref() => 1,
        _ => 0,
    };
    PairMatch { matches }
}
