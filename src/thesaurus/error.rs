use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThesaurusError {
    #[error("failed to read thesaurus at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read thesaurus: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed sense code '{code}': expected at least {min_len} ASCII characters")]
    MalformedCode { code: String, min_len: usize },
}

pub type ThesaurusResult<T> = Result<T, ThesaurusError>;
