use super::{ConfigError, ValidationError};

/// Top-level error for the Nugget workspace.
#[derive(Debug, thiserror::Error)]
pub enum NuggetError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NuggetResult<T> = Result<T, NuggetError>;
