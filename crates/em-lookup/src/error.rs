//! Error types for official lookups.

use thiserror::Error;

/// Errors that can occur while looking up officials.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No lookup service is configured.
    #[error("official lookup is disabled")]
    Disabled,

    /// Request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("lookup service returned status {status}: {message}")]
    Status { status: u16, message: String },
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
