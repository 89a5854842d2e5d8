use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field path: {0}")]
    UnknownField(String),

    #[error("unknown visibility field: {0}")]
    UnknownVisibilityField(String),
}
