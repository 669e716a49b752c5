//! Error types for Mentora.

use thiserror::Error;

/// Common error type for Mentora.
#[derive(Error, Debug)]
pub enum MentoraError {
    /// Database error.
    ///
    /// Wraps errors from the storage backend. Errors from sqlx are
    /// automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for MentoraError {
    fn from(e: sqlx::Error) -> Self {
        MentoraError::Database(e.to_string())
    }
}

/// Result type alias for Mentora operations.
pub type Result<T> = std::result::Result<T, MentoraError>;
