use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Caller-supplied data was rejected (search filters, JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed or out-of-range `BLUEPRINT_*` settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The speech-to-text capability reported a failure.
    #[error("Speech recognition failed: {0}")]
    Speech(String),

    /// The charting capability rejected a chart.
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// The session actor could not be reached or dropped its reply.
    #[error("Session actor error: {0}")]
    Actor(String),

    /// A delay or actor reply did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}
