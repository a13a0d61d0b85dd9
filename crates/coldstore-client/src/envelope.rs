//! The `{ success, data }` wrapper every API response carries.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    /// Server-side explanation, usually only present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload. `success: false` and a missing `data` are both
    /// failures; partial data is never handed back.
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Unsuccessful {
                message: self
                    .message
                    .unwrap_or_else(|| "request was not successful".into()),
            });
        }
        self.data.ok_or_else(|| ClientError::Unsuccessful {
            message: "response envelope has no data".into(),
        })
    }
}
