//! HTTP client types for Fleet API communication.
//!
//! This module provides the request layer every resource call goes through.
//! It handles header merging, bearer authentication, query string encoding,
//! and error mapping.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request descriptor to be sent to the API
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: The caller-owned client with typed verb helpers
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::{FleetConfig, BaseUrl, RestClient};
//!
//! let config = FleetConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//! client.set_token(Some("secret-token"));
//!
//! let response = client.get("customers", None).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Each call sends exactly one request. There is no retry: a non-2xx status
//! becomes [`HttpError::Response`] and a transport failure becomes
//! [`HttpError::Network`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
