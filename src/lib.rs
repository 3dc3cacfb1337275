//! # Fleet API Rust SDK
//!
//! A typed client for a car-rental and fleet-management REST API: customers,
//! reservations, vehicles, inventory, payments, contacts and preferences.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`FleetConfig`] and [`FleetConfigBuilder`]
//! - Validated newtypes for the base URL and the bearer token
//! - A caller-owned [`RestClient`] carrying the token for every request
//! - Typed resources with CRUD operations via [`rest::RestResource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fleet_api::{FleetConfig, BaseUrl};
//!
//! let config = FleetConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("RentalDesk/2.1")
//!     .build()
//!     .unwrap();
//! ```
//!
//! Or from the environment (`FLEET_API_BASE_URL`, optional
//! `FLEET_API_USER_AGENT_PREFIX`):
//!
//! ```rust,ignore
//! let config = fleet_api::FleetConfig::from_env()?;
//! ```
//!
//! ## Authentication
//!
//! The token is set once on the client and attached as
//! `Authorization: Bearer <token>` to every later request. Setting an empty
//! or absent value clears it.
//!
//! ```rust,ignore
//! use fleet_api::{ApiToken, RestClient};
//!
//! let client = RestClient::new(&config)?;
//! client.set_token(Some("secret-token"));
//!
//! // Or start from FLEET_API_TOKEN
//! let client = match ApiToken::from_env() {
//!     Some(token) => RestClient::with_token(&config, token)?,
//!     None => RestClient::new(&config)?,
//! };
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::Customer;
//! use std::collections::HashMap;
//!
//! let mut query = HashMap::new();
//! query.insert("limit".to_string(), "5".to_string());
//! let customers = Customer::all(&client, Some(query)).await?;
//!
//! let created = Customer {
//!     name: "Ada Lovelace".to_string(),
//!     email: Some("ada@example.com".to_string()),
//!     ..Default::default()
//! }
//! .create(&client)
//! .await?;
//! ```
//!
//! ## Errors
//!
//! Nothing is retried. A non-2xx response surfaces with its status code and
//! decoded body (`status()` / `body()` on every error type); a transport
//! failure has no status.
//!
//! ## Design Principles
//!
//! - **No global state**: the token lives in the client that uses it
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{ApiToken, BaseUrl, FleetConfig, FleetConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource infrastructure
pub use rest::{ResourceError, RestResource};
