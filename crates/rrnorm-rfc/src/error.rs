use thiserror::Error;

/// Recurrence option validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    /// One or more option names are not recognized. Holds every offending name.
    #[error("Invalid options: {}", .0.join(", "))]
    InvalidOptionKey(Vec<String>),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("bysetpos must be between 1 and 366, or between -366 and -1 (got {0})")]
    InvalidSetPosition(i32),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid option value: {0}")]
    InvalidOptionValue(#[from] serde_json::Error),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
