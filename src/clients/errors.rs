//! HTTP-specific error types for the Model Information Service client.
//!
//! - [`HttpResponseError`]: the service answered with a non-2xx status
//! - [`DecodeError`]: the response body could not be decoded as JSON
//! - [`HttpError`]: unified error type returned by every fetch
//!
//! # Example
//!
//! ```rust,ignore
//! use smis::HttpError;
//!
//! match resource.get().await {
//!     Ok(payload) => println!("{payload}"),
//!     Err(HttpError::Response(e)) => println!("status {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("bad body: {e}"),
//!     Err(HttpError::Network(e)) => println!("network: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the service responds with a non-successful status.
///
/// The message follows the form
/// `"404 Client Error: Not Found for url: https://svc.example.com/api/nope"`.
///
/// # Example
///
/// ```rust
/// use smis::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     url: "https://svc.example.com/api/nope".to_string(),
///     message: "404 Client Error: Not Found for url: https://svc.example.com/api/nope".to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.is_client_error());
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The URL that was requested.
    pub url: String,
    /// Human readable error message.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns `true` for 4xx statuses.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.code >= 400 && self.code <= 499
    }

    /// Returns `true` for 5xx statuses.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500 && self.code <= 599
    }
}

/// Error returned when a response body is not valid JSON, or does not
/// match the type it is being decoded into.
#[derive(Debug, Error)]
#[error("Failed to decode response body: {source}")]
pub struct DecodeError {
    /// The underlying `serde_json` error.
    #[from]
    pub source: serde_json::Error,
}

/// Unified error type for all fetch failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The service returned a non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Network or connection error; no response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the status code when the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Decode(_) | Self::Network(_) => None,
        }
    }
}
