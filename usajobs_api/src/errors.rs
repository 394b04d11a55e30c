//! Error types for the API client.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// Errors that can occur when building, sending, or decoding an API call.
///
/// None of these are retried by the client. `Transport` is the only variant
/// a caller might reasonably retry.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed without a required credential.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    /// An options value could not be turned into query parameters.
    #[error("Failed to encode query parameter `{field}`: {reason}")]
    Encoding { field: &'static str, reason: String },

    /// The base URL and endpoint path did not form a valid URL.
    #[error("Failed to construct request: {0}")]
    RequestConstruction(String),

    /// Network-level failure (DNS, connection refused, timeout, body read).
    #[error("Transport error")]
    Transport(#[from] reqwest::Error),

    /// The body could not be decoded into the requested shape. The status,
    /// headers, and body are kept so the caller can tell an error page apart
    /// from a malformed success payload.
    #[error("Failed to decode response with status {status}")]
    Decoding {
        status: StatusCode,
        status_text: String,
        headers: HeaderMap,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns the HTTP status of the response that failed to decode, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Decoding { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}
