//! Error types for the Skald SDK.

use thiserror::Error;

/// Result type alias using the SDK's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Skald API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before or by the server (bad pagination, malformed filter)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Identifier not resolvable in the requested identifier space
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-2xx response from the API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Connection failure or timeout; safe to retry
    #[error("Transient error: {0}")]
    Transient(String),

    /// Streaming response aborted before completion
    #[error("Stream error: {0}")]
    Stream(String),

    /// Response body failed to decode
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the operation may succeed on retry.
    ///
    /// The SDK never retries on its own; callers owning a retry policy can
    /// branch on this instead of matching variants.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Transient(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Serialization(e.to_string())
        } else if e.is_builder() {
            Error::Config(e.to_string())
        } else {
            // Timeouts, connect failures, and other transport faults
            Error::Transient(e.to_string())
        }
    }
}
