use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftBreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shift must be an integer, got '{0}'")]
    InvalidShiftType(String),

    #[error("Shift must be in range 0-25, got {0}")]
    InvalidShiftRange(i64),

    #[error("Unsupported cipher '{0}' (only caesar is available)")]
    UnsupportedCipher(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type SbResult<T> = Result<T, ShiftBreakError>;
