//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Forms surface `Display` output directly, so variants carry the
//! human-readable message the server sent where one exists. Identity
//! resolution maps a 401 to `SessionExpired`, which forces a logout; every
//! other consumer sees `Auth` with the server's own wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Error shape for every REST call the client makes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed or the response body was undecodable.
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the request and said why.
    #[error("{message}")]
    Auth { status: u16, message: String },
    /// A 401 during identity resolution; the stored session is no longer valid.
    #[error("session expired, please sign in again")]
    SessionExpired,
    /// A sign-in attempt was refused because one is already running.
    #[error("another sign-in attempt is already in progress")]
    InFlight,
}

/// Error body the API sends alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Map a rejected response to an `ApiError`, preferring the server's message.
pub(crate) fn classify(status: u16, body: Option<ErrorBody>) -> ApiError {
    let message = body
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Auth { status, message }
}
