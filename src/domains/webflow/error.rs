//! Webflow API error types.

use thiserror::Error;

/// Result type for Webflow API operations.
pub type WebflowResult<T> = Result<T, WebflowError>;

/// Errors that can occur while talking to the Webflow API.
#[derive(Debug, Error)]
pub enum WebflowError {
    /// The API answered with a status outside 200-299.
    ///
    /// The body is kept verbatim, even when it happens to be JSON.
    #[error("Webflow API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A success response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The query string could not be encoded.
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The API token cannot be used as an HTTP header value.
    #[error("API token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// The configured base URL cannot have path segments appended to it.
    #[error("Invalid Webflow API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl WebflowError {
    /// Create an API error from a status code and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}
