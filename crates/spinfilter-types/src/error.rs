use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpinFilterError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SpinFilterResult<T> = Result<T, SpinFilterError>;
