//! Custom error types for the application

use thiserror::Error;

/// Rejected input to the spring transform
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpringError {
    /// Duration was zero, negative, NaN or infinite
    #[error("invalid duration: {0} ms (must be a finite number greater than zero)")]
    InvalidDuration(f64),
    /// Bounce was NaN or infinite
    #[error("invalid bounce: {0} (must be a finite number)")]
    InvalidBounce(f64),
}

impl SpringError {
    /// Every variant is an invalid-input failure; kept as a predicate so callers
    /// can match on the kind without caring which field was wrong.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SpringError::InvalidDuration(_) | SpringError::InvalidBounce(_)
        )
    }
}

/// Application-specific error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Spring conversion rejected its input
    #[error("Conversion error: {0}")]
    Spring(#[from] SpringError),
    /// Command line values that parse but make no sense together
    #[error("Configuration error: {0}")]
    Config(String),
    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// JSON output failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// Blocking prompt task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
