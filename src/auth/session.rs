//! Session token storage for Fleet API authentication.
//!
//! This module provides the [`Session`] type, which holds the single bearer
//! token attached to outgoing requests.

use std::sync::{PoisonError, RwLock};

use crate::config::ApiToken;

/// Holds the bearer token used to authenticate API calls.
///
/// A session starts without a token. Setting a token makes every subsequent
/// request carry `Authorization: Bearer <token>`; clearing it (by passing an
/// absent or empty value) makes subsequent requests unauthenticated.
///
/// The token is read once per request, when the request is constructed.
/// Changing it while requests are in flight does not affect those requests.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`. The token sits behind a read-write lock that
/// is never held across an `.await`.
///
/// # Example
///
/// ```rust
/// use fleet_api::Session;
///
/// let session = Session::new();
/// assert!(!session.has_token());
///
/// session.set_token(Some("secret-token"));
/// assert!(session.has_token());
///
/// session.set_token(Some(""));
/// assert!(!session.has_token());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<ApiToken>>,
}

impl Session {
    /// Creates a session with no token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that starts with the given token.
    #[must_use]
    pub const fn with_token(token: ApiToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }

    /// Sets or clears the bearer token.
    ///
    /// `None` or an empty string clears the token. No validation of the
    /// token format is performed.
    pub fn set_token(&self, token: Option<&str>) {
        self.set_api_token(token.and_then(|value| ApiToken::new(value).ok()));
    }

    /// Sets or clears the bearer token from an already validated value.
    pub fn set_api_token(&self, token: Option<ApiToken>) {
        let cleared = token.is_none();
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;

        if cleared {
            tracing::debug!("Session token cleared");
        } else {
            tracing::debug!("Session token set");
        }
    }

    /// Clears the bearer token.
    pub fn clear_token(&self) {
        self.set_api_token(None);
    }

    /// Returns a snapshot of the current token.
    #[must_use]
    pub fn token(&self) -> Option<ApiToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if a token is currently set.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the `Authorization` header value for the current token.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.token()
            .map(|token| format!("Bearer {}", token.as_ref()))
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
