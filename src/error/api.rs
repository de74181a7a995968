//! Backend API error types.
//!
//! Errors produced while talking to the portal backend. `ApiError` is `Clone` because a single
//! failed read is shared between every caller waiting on the same request cache entry and is
//! replayed to later callers for the remainder of the entry's TTL.

use thiserror::Error;

/// Backend API error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status.
    ///
    /// # Fields
    /// - `status` - HTTP status code returned by the backend
    /// - `message` - `message` field of the JSON error body, if the body carried one
    #[error("Request failed with status {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// The request never produced an HTTP response (DNS, refused connection, reset).
    ///
    /// This is the equivalent of a browser reporting status `0`.
    #[error("Failed to reach the portal backend: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected envelope.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    /// The request succeeded at the HTTP level but the envelope reports a failure,
    /// e.g. a login response without a credential or a checkout without a redirect URL.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Maps a `reqwest` error into an API error.
    ///
    /// # Arguments
    /// - `err` - Error returned by `reqwest` while sending a request or reading its body
    ///
    /// # Returns
    /// - `ApiError::Decode` - The body could not be deserialized
    /// - `ApiError::Status` - `reqwest` attached an HTTP status to the error
    /// - `ApiError::Network` - Any other transport failure
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }

        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                message: None,
            },
            None => Self::Network(err.to_string()),
        }
    }

    /// Message suitable for inline display next to the form that issued the request.
    ///
    /// Prefers the backend-provided message, falling back to the supplied text.
    ///
    /// # Arguments
    /// - `fallback` - Text used when the backend gave no message
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
