use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jieba_rs::Jieba;
use tracing::info;

use super::Tokenizer;
use super::error::TokenizeError;

/// Chinese segmenter backed by jieba's prefix dictionary.
///
/// `tokenize` runs precise mode (with HMM discovery of unknown words when
/// enabled); `tokenize_full` runs full mode. Whitespace-only segments are
/// dropped so they never occupy a position.
pub struct JiebaTokenizer {
    jieba: Jieba,
    hmm: bool,
}

impl std::fmt::Debug for JiebaTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaTokenizer")
            .field("hmm", &self.hmm)
            .finish_non_exhaustive()
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl JiebaTokenizer {
    /// Creates a segmenter with the bundled dictionary.
    pub fn new(hmm: bool) -> Self {
        Self {
            jieba: Jieba::new(),
            hmm,
        }
    }

    /// Adds entries from a user dictionary (`word [freq] [tag]` per line).
    pub fn with_user_dict<P: AsRef<Path>>(mut self, path: P) -> Result<Self, TokenizeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TokenizeError::UserDictIo {
            path: path.to_path_buf(),
            source,
        })?;

        self.jieba
            .load_dict(&mut BufReader::new(file))
            .map_err(|e| TokenizeError::UserDictInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), "Loaded user segmentation dictionary");
        Ok(self)
    }

    pub fn hmm(&self) -> bool {
        self.hmm
    }
}

fn keep_words(segments: Vec<&str>) -> Vec<String> {
    segments
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}

impl Tokenizer for JiebaTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        keep_words(self.jieba.cut(text, self.hmm))
    }

    fn tokenize_full(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        keep_words(self.jieba.cut_all(text))
    }
}
