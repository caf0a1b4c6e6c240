//! Error types for the sombrero field service.

use thiserror::Error;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Primary error type for field generation, decoding and service setup.
#[derive(Debug, Error)]
pub enum FieldError {
    // === Data Errors ===
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl FieldError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            FieldError::BufferSize { .. } | FieldError::InvalidGrid(_) => 400,
            FieldError::InvalidConfig(_) | FieldError::Internal(_) => 500,
        }
    }
}

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        FieldError::Internal(err.to_string())
    }
}
