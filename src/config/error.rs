//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Worker count is zero.
    #[error("invalid worker count '{value}': must be at least 1")]
    InvalidWorkers { value: String },

    /// Worker count string could not be parsed as a number.
    #[error("failed to parse worker count '{value}': {source}")]
    WorkersParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Boolean flag has an unrecognized value.
    #[error("invalid value '{value}' for {name}: expected true/false")]
    InvalidBool { name: &'static str, value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
