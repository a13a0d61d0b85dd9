//! REST client error types.

use thiserror::Error;

/// Everything that can go wrong between a service call and the server.
///
/// Callers treat all variants alike (log, report, let the user retry);
/// the split exists so logs and retry policy can tell them apart.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, or a body that did not decode.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose envelope said `success: false` or carried no data.
    #[error("API reported failure: {message}")]
    Unsuccessful { message: String },

    /// Payload rejected before anything was sent.
    #[error("Invalid request: {0}")]
    Validation(#[from] coldstore_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of an `Api` error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
