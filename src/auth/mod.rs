//! Authentication for the Fleet API SDK.
//!
//! The API authenticates requests with a bearer token. This module provides
//! [`Session`], the caller-owned holder of that token. Every
//! [`RestClient`](crate::RestClient) owns one session, so setting the token
//! once authenticates every call made through that client.
//!
//! There is no token format validation, expiry tracking, or refresh logic.
//!
//! # Example
//!
//! ```rust
//! use fleet_api::{ApiToken, Session};
//!
//! let session = Session::with_token(ApiToken::new("secret-token").unwrap());
//! assert!(session.has_token());
//!
//! session.clear_token();
//! assert!(!session.has_token());
//! ```

pub mod session;

pub use session::Session;
