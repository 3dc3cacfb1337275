//! HTTP-specific error types for the Fleet API SDK.
//!
//! This module contains error types for HTTP operations: error responses
//! from the API, request validation failures, and transport failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses, with status and body
//! - [`InvalidHttpRequestError`]: A request that failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! No error is retried. Every failure is returned to the caller unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(e) => println!("Transport error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the status code and the decoded response body unchanged. A body
/// that is not valid JSON is kept as a JSON string.
///
/// # Example
///
/// ```rust
/// use fleet_api::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: json!({"message": "Customer not found"}),
///     request_id: None,
/// };
///
/// assert_eq!(error.code, 404);
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Request identifier from the `X-Request-Id` header, if present.
    pub request_id: Option<String>,
}

impl HttpResponseError {
    /// Returns a human-readable message from the body, if the API sent one.
    ///
    /// Looks at `message`, then `error`, then a plain string body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .or_else(|| self.body.get("error").and_then(serde_json::Value::as_str))
            .or_else(|| self.body.as_str())
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use fleet_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidHeader {
///     name: "Bad Header".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Invalid header 'Bad Header'.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use [`status`](Self::status) and [`body`](Self::body) to inspect error
/// responses without matching on every variant. Transport failures have
/// neither.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error; no response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) | Self::ClientBuild(_) => None,
        }
    }

    /// Returns the response body, if a response was received.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Response(e) => Some(&e.body),
            Self::InvalidRequest(_) | Self::Network(_) | Self::ClientBuild(_) => None,
        }
    }

    /// Returns `true` if no response was received.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
