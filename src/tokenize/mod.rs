//! Word segmentation.
//!
//! Scoring consumes a [`Tokenizer`] rather than splitting text itself: Chinese
//! has no whitespace between words, so segmentation is a dictionary/HMM job
//! handled by [`JiebaTokenizer`]. [`PreSegmentedTokenizer`] covers input that
//! is already segmented with spaces.

pub mod error;
pub mod jieba;


pub use error::TokenizeError;
pub use jieba::JiebaTokenizer;

/// Splits text into ordered surface forms.
///
/// Implementations must be deterministic for a given input.
pub trait Tokenizer: Send + Sync {
    /// Precise segmentation; each character belongs to exactly one token.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Full segmentation listing every dictionary word found in the text
    /// (tokens may overlap). Defaults to [`tokenize`](Self::tokenize).
    fn tokenize_full(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for std::sync::Arc<T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }

    fn tokenize_full(&self, text: &str) -> Vec<String> {
        (**self).tokenize_full(text)
    }
}

/// Splits on whitespace; for text segmented upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreSegmentedTokenizer;

impl Tokenizer for PreSegmentedTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Tokenizer returning canned segmentations, for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default, Clone)]
pub struct MockTokenizer {
    segments: std::collections::HashMap<String, Vec<String>>,
}

#[cfg(any(test, feature = "mock"))]
impl MockTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the tokens returned for `text`.
    pub fn with(mut self, text: &str, tokens: &[&str]) -> Self {
        self.segments.insert(
            text.to_string(),
            tokens.iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[cfg(any(test, feature = "mock"))]
impl Tokenizer for MockTokenizer {
    /// Unregistered text falls back to whitespace splitting.
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.segments
            .get(text)
            .cloned()
            .unwrap_or_else(|| PreSegmentedTokenizer.tokenize(text))
    }
}
