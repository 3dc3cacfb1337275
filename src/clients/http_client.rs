//! HTTP client for Fleet API communication.
//!
//! This module provides the [`HttpClient`] type, the shared request layer
//! every resource call goes through. It attaches default headers and the
//! bearer token, encodes the query string and JSON body, and turns non-2xx
//! responses into errors.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, FleetConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Fleet API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - The `Authorization: Bearer` header when the session holds a token
/// - Canonical query strings and JSON bodies
///
/// Requests are attempted exactly once. Failures are returned unchanged.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fleet_api::{FleetConfig, BaseUrl, Session};
/// use fleet_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = FleetConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config, Session::new())?;
/// client.session().set_token(Some("secret-token"));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "customers")
///     .query_param("limit", "5")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is resolved against.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Holder of the bearer token.
    session: Session,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, default headers, user agent prefix and timeout
    /// * `session` - The session providing the bearer token
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &FleetConfig, session: Session) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Fleet API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        insert_header(&mut default_headers, "User-Agent", user_agent);
        insert_header(&mut default_headers, "Accept", "application/json".to_string());
        for (name, value) in config.default_headers() {
            insert_header(&mut default_headers, name, value.clone());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::ClientBuild)?;

        tracing::debug!(
            host = config.base_url().host_name(),
            "Created Fleet API HTTP client"
        );

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            session,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    ///
    /// These never include `Authorization`; the bearer header is added per
    /// request from the session.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the session holding the bearer token.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the full URL a request will be sent to, including its query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let url = self.base_url.join(&request.path);
        match request.query_string() {
            Some(query) => format!("{url}?{query}"),
            None => url,
        }
    }

    /// Returns the headers a request will be sent with.
    ///
    /// Default headers are merged with the request's overrides (overrides win,
    /// names compare case-insensitively). `Content-Type: application/json` is
    /// added when the request has a body, and `Authorization: Bearer <token>`
    /// when the session currently holds a token.
    #[must_use]
    pub fn headers_for(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();

        if request.body.is_some() {
            insert_header(&mut headers, "Content-Type", "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (name, value) in extra {
                insert_header(&mut headers, name, value.clone());
            }
        }
        if let Some(authorization) = self.session.authorization_header() {
            insert_header(&mut headers, "Authorization", authorization);
        }

        headers
    }

    /// Sends an HTTP request to the Fleet API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - No response is received (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        let headers = self.headers_for(&request);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            authenticated = headers.contains_key("Authorization"),
            "Sending Fleet API request"
        );

        let mut req_builder = self.client.request(request.http_method.into(), &url);
        for (name, value) in &headers {
            req_builder = req_builder.header(name, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        // The status is already known; a truncated body must not hide it
        let body_text = match res.text().await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(
                    path = %request.path,
                    status = code,
                    error = %error,
                    "Failed to read Fleet API response body"
                );
                String::new()
            }
        };
        let response = HttpResponse::new(code, res_headers, HttpResponse::decode_body(&body_text));

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Fleet API returned an error status"
        );

        let request_id = response.request_id().map(String::from);
        Err(HttpError::Response(HttpResponseError {
            code,
            body: response.body,
            request_id,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Inserts a header, replacing any existing header whose name matches
/// case-insensitively.
fn insert_header(headers: &mut HashMap<String, String>, name: &str, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value);
}
