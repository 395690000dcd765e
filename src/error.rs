//! Error handling module for SalonTUI
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Booking wizard refusals and headless catalog lookups surface through
//! this type; the binary wraps it in `anyhow` with context.

use thiserror::Error;

/// Main error type for SalonTUI
#[derive(Error, Debug)]
pub enum SalonTuiError {
    /// IO errors (preference file, terminal, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (CLI input, unknown catalog ids)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Booking wizard transition errors
    #[error("Booking transition error: {0}")]
    BookingTransition(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SalonTUI operations
pub type Result<T> = std::result::Result<T, SalonTuiError>;

impl SalonTuiError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
