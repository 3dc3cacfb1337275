//! Configuration types for the Fleet API SDK.
//!
//! This module provides the configuration used to point the SDK at an API
//! deployment and to shape every outgoing request.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`FleetConfig`]: The main configuration struct holding all SDK settings
//! - [`FleetConfigBuilder`]: A builder for constructing [`FleetConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiToken`]: A validated bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use fleet_api::{FleetConfig, BaseUrl};
//!
//! let config = FleetConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .default_header("X-Tenant", "north")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl, TOKEN_ENV_VAR};

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "FLEET_API_BASE_URL";

/// Environment variable holding an optional user agent prefix.
pub const USER_AGENT_PREFIX_ENV_VAR: &str = "FLEET_API_USER_AGENT_PREFIX";

/// Configuration for the Fleet API SDK.
///
/// Holds the base URL every request path is resolved against, headers sent
/// with every request, and transport settings.
///
/// # Thread Safety
///
/// `FleetConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use fleet_api::{FleetConfig, BaseUrl};
///
/// let config = FleetConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .user_agent_prefix("RentalDesk/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.example.com");
/// ```
#[derive(Clone, Debug)]
pub struct FleetConfig {
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl FleetConfig {
    /// Creates a new builder for constructing a `FleetConfig`.
    #[must_use]
    pub fn builder() -> FleetConfigBuilder {
        FleetConfigBuilder::new()
    }

    /// Builds a configuration from environment variables.
    ///
    /// Reads `FLEET_API_BASE_URL` (required) and
    /// `FLEET_API_USER_AGENT_PREFIX` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the base URL variable is
    /// unset or empty, or [`ConfigError::InvalidBaseUrl`] if it is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar {
                name: BASE_URL_ENV_VAR,
            })?;

        let mut builder = Self::builder().base_url(BaseUrl::new(base_url)?);

        if let Some(prefix) = std::env::var(USER_AGENT_PREFIX_ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty())
        {
            builder = builder.user_agent_prefix(prefix);
        }

        builder.build()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    ///
    /// When `None`, the transport default applies.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify FleetConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FleetConfig>();
};

/// Builder for constructing [`FleetConfig`] instances.
///
/// The only required field is `base_url`.
///
/// # Defaults
///
/// - `default_headers`: empty
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (transport default)
#[derive(Debug, Default)]
pub struct FleetConfigBuilder {
    base_url: Option<BaseUrl>,
    default_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl FleetConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Request-level header overrides take precedence over these.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`FleetConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or [`ConfigError::InvalidHeader`] if a default header cannot be sent.
    pub fn build(self) -> Result<FleetConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        for (name, value) in &self.default_headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
            {
                return Err(ConfigError::InvalidHeader { name: name.clone() });
            }
        }

        Ok(FleetConfig {
            base_url,
            default_headers: self.default_headers,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
