//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Weather provider error
    #[error("Weather provider error: {0}")]
    Weather(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
