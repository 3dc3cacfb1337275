//! REST-specific error types for the Fleet API SDK.
//!
//! This module contains error types for REST operations: invalid paths,
//! wrapped HTTP errors, and JSON encode/decode failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::clients::rest::{RestClient, RestError};
//!
//! match client.get_json::<Vec<Customer>>("customers", None).await {
//!     Ok(customers) => println!("{} customers", customers.len()),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//!     Err(RestError::Decode { path, source }) => println!("{path}: {source}"),
//!     Err(RestError::Encode { source }) => println!("Bad body: {source}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST path is invalid (empty after normalization).
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {source}")]
    Encode {
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// The path that was requested.
        path: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl RestError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the error response body, if a response was received.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http(e) => e.body(),
            _ => None,
        }
    }
}
