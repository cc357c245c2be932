//! Error types for the API client.

/// Errors that can occur when building or executing catalog requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A path or URL could not be parsed as a URL reference.
    #[error("Malformed URL {input:?}: {reason}")]
    MalformedUrl { input: String, reason: String },
    /// A configured header value cannot be sent over HTTP.
    #[error("Invalid {name} header {value:?}: {reason}")]
    InvalidHeader {
        name: &'static str,
        value: String,
        reason: String,
    },
    /// The transport failed before a response body was fully read
    /// (DNS, connection, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a JSON object.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(input: &str, reason: impl ToString) -> Self {
        Error::MalformedUrl {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
