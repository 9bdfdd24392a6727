use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("failed to open user dictionary {path}: {source}")]
    UserDictIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid user dictionary {path}: {reason}")]
    UserDictInvalid { path: PathBuf, reason: String },
}
