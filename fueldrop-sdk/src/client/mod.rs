//! HTTP clients for the FuelDrop order API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.
//!
//! All clients speak the `{success, data, message}` envelope and authenticate
//! with `Authorization: Bearer <token>` from a [`SessionStore`]. Nothing is
//! retried; every failure maps to one [`ClientError`] variant for the UI to
//! render.

mod admin;
mod customer;
mod station;

pub use admin::AdminClient;
pub use customer::CustomerClient;
pub use station::StationClient;

use reqwest::StatusCode;

use crate::objects::envelope::{ApiEnvelope, EnvelopeError};
use crate::session::SessionStore;

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// 2xx response whose envelope said `success: false`, or was missing its
    /// data. The rejection message is surfaced verbatim.
    #[error("{0}")]
    Rejected(#[from] EnvelopeError),

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The call requires a session token and the store has none.
    #[error("no session token available")]
    NotAuthenticated,
}

fn bearer(session: &SessionStore) -> Result<String, ClientError> {
    session
        .token()
        .map(|token| format!("Bearer {token}"))
        .ok_or(ClientError::NotAuthenticated)
}

async fn parse_data<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let envelope = read_envelope::<T>(resp).await?;
    Ok(envelope.into_result()?)
}

async fn parse_ack(resp: reqwest::Response) -> Result<(), ClientError> {
    let envelope = read_envelope::<serde_json::Value>(resp).await?;
    envelope.into_ack()?;
    Ok(())
}

async fn read_envelope<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<ApiEnvelope<T>, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}
