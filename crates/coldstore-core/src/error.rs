//! Error types for Coldstore core library.

use thiserror::Error;

/// Result type alias using Coldstore Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Coldstore operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A payload failed a client-side check before being sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
