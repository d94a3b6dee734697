//! The `{success, data, message}` response envelope used by every order API
//! endpoint.

use serde::{Deserialize, Serialize};

/// Application-level rejection carried inside a 2xx response.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// `success: false`. The message is surfaced verbatim.
    #[error("{0}")]
    Rejected(String),
    /// `success: true` but the expected `data` field was absent.
    #[error("response missing data field")]
    MissingData,
}

/// Generic response envelope. `data` and `message` are both optional on the
/// wire; which one is present depends on `success`. Missing fields
/// deserialize to `None` without requiring `T: Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap an envelope that must carry data (fetch endpoints).
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(self.rejection_message()));
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }

    /// Unwrap an envelope where data is optional (mutation acks).
    pub fn into_ack(self) -> Result<Option<T>, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(self.rejection_message()));
        }
        Ok(self.data)
    }

    fn rejection_message(self) -> String {
        self.message
            .unwrap_or_else(|| "request failed".to_owned())
    }
}
