use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid scoring configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("scoring worker failed: {reason}")]
    WorkerFailed { reason: String },
}

impl From<tokio::task::JoinError> for ScoringError {
    fn from(err: tokio::task::JoinError) -> Self {
        ScoringError::WorkerFailed {
            reason: err.to_string(),
        }
    }
}
