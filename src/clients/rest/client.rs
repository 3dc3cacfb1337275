//! REST client implementation for the Fleet API.
//!
//! This module provides the [`RestClient`] type, the caller-owned object that
//! carries the configuration and the session token into every call.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiToken, FleetConfig};

/// REST API client for the Fleet API.
///
/// Provides verb methods (`get`, `post`, `put`, `delete`) returning raw
/// [`HttpResponse`]s and typed variants (`get_json`, `post_json`, ...) that
/// decode the body into a caller-chosen type.
///
/// The client owns a [`Session`]: set the token once with
/// [`set_token`](Self::set_token) and every later call is authenticated.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks
/// (e.g., behind an `Arc`).
///
/// # Example
///
/// ```rust,ignore
/// use fleet_api::{FleetConfig, BaseUrl, RestClient};
///
/// let config = FleetConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config)?;
/// client.set_token(Some("secret-token"));
///
/// let customers: serde_json::Value = client.get_json("customers", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client with no token set.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be created.
    pub fn new(config: &FleetConfig) -> Result<Self, RestError> {
        Self::with_session(config, Session::new())
    }

    /// Creates a new REST client that starts with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be created.
    pub fn with_token(config: &FleetConfig, token: ApiToken) -> Result<Self, RestError> {
        Self::with_session(config, Session::with_token(token))
    }

    /// Creates a new REST client around an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be created.
    pub fn with_session(config: &FleetConfig, session: Session) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config, session)?;
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the session holding the bearer token.
    #[must_use]
    pub const fn session(&self) -> &Session {
        self.http_client.session()
    }

    /// Sets or clears the bearer token used by every subsequent request.
    ///
    /// `None` or an empty string clears it.
    pub fn set_token(&self, token: Option<&str>) {
        self.session().set_token(token);
    }

    /// Clears the bearer token.
    pub fn clear_token(&self) {
        self.session().clear_token();
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends a GET request and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Decode`] if the body does not match `T`, plus
    /// the errors of [`get`](Self::get).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "5".to_string());
    /// let customers: Vec<Customer> = client.get_json("customers", Some(query)).await?;
    /// ```
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError> {
        let response = self.get(path, query).await?;
        decode(path, response)
    }

    /// Sends a POST request with a serialized body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Encode`] if `body` cannot be serialized and
    /// [`RestError::Decode`] if the response does not match `T`.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, encode(body)?, query).await?;
        decode(path, response)
    }

    /// Sends a PUT request with a serialized body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Encode`] if `body` cannot be serialized and
    /// [`RestError::Decode`] if the response does not match `T`.
    pub async fn put_json<B, T>(
        &self,
        path: &str,
        body: &B,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.put(path, encode(body)?, query).await?;
        decode(path, response)
    }

    /// Sends a DELETE request and decodes the response body.
    ///
    /// An empty response body decodes as `null`, so `T = ()` and
    /// `T = Option<_>` both accept a `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Decode`] if the body does not match `T`, plus
    /// the errors of [`delete`](Self::delete).
    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError> {
        let response = self.delete(path, query).await?;
        decode(path, response)
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Serializes a request body to JSON.
fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, RestError> {
    serde_json::to_value(body).map_err(|source| RestError::Encode { source })
}

/// Decodes a response body into `T`.
fn decode<T: DeserializeOwned>(path: &str, response: HttpResponse) -> Result<T, RestError> {
    serde_json::from_value(response.body).map_err(|source| RestError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Normalizes a REST API path.
///
/// Strips leading and trailing `/` characters and rejects paths that are
/// empty afterwards.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}
