//! Error types for REST resource operations.
//!
//! Resource calls return [`ResourceError`]. API error responses are not
//! reinterpreted: the status code and body the server sent stay reachable
//! through [`ResourceError::status`] and [`ResourceError::body`], and the
//! helpers [`ResourceError::is_not_found`] and
//! [`ResourceError::validation_errors`] read them for the common cases.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::{RestResource, ResourceError};
//!
//! match Customer::find(&client, "42").await {
//!     Ok(customer) => println!("Found: {}", customer.name),
//!     Err(e) if e.is_not_found() => println!("No such customer"),
//!     Err(e) if e.status() == Some(422) => {
//!         for (field, messages) in e.validation_errors() {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource declares no path for the requested operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// The record has no id, so it cannot be updated or deleted.
    #[error("{resource}::{operation} requires a record with an id")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            Self::PathResolutionFailed { .. } | Self::MissingId { .. } => None,
        }
    }

    /// Returns the error response body, if a response was received.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Rest(e) => e.body(),
            Self::PathResolutionFailed { .. } | Self::MissingId { .. } => None,
        }
    }

    /// Returns the request ID of the failed response, if the server sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Rest(RestError::Http(HttpError::Response(e))) => e.request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns field-level validation messages from the error body.
    ///
    /// Empty when no response was received or the body carries no `errors`.
    #[must_use]
    pub fn validation_errors(&self) -> HashMap<String, Vec<String>> {
        self.body().map(parse_validation_errors).unwrap_or_default()
    }
}

/// Parses validation errors from an API response body.
///
/// Accepts an object of field to messages:
/// ```json
/// { "errors": { "email": ["is invalid"], "phone": "is required" } }
/// ```
///
/// A list or a single string is filed under `base`:
/// ```json
/// { "errors": ["Pickup date must precede return date"] }
/// ```
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            serde_json::Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .filter_map(|v| v.as_str().map(ToString::to_string))
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            serde_json::Value::Array(arr) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            serde_json::Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
