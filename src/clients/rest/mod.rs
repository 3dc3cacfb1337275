//! REST API client for the Fleet API.
//!
//! This module provides the [`RestClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient), with convenient verb methods
//! and typed JSON helpers.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `put()`, `delete()` and their `_json` variants
//! - [`RestError`]: Error type for REST operations
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::{FleetConfig, RestClient};
//!
//! let config = FleetConfig::from_env()?;
//! let client = RestClient::new(&config)?;
//! client.set_token(std::env::var("FLEET_API_TOKEN").ok().as_deref());
//!
//! let response = client.get("customers", None).await?;
//! println!("Customers: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped: `/customers/` -> `customers`.
//! Paths are resolved against the configured base URL.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
