use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RfcError(#[from] rrnorm_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] rrnorm_core::error::CoreError),

    #[error("Failed to read input: {0}")]
    InputError(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    OutputError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
