//! REST resource infrastructure for the Fleet API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: CRUD operations driven by per-resource path templates
//! - **[`ReadOnlyResource`] marker trait**: resources that only support reads
//! - **Path building**: [`ResourcePath`], [`get_path`] and [`build_path`]
//! - **[`ResourceError`]**: errors for resource operations
//!
//! The concrete resources (customers, reservations, vehicles, ...) live in
//! [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::{FleetConfig, RestClient};
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::Customer;
//!
//! let client = RestClient::new(&FleetConfig::from_env()?)?;
//! client.set_token(Some("secret-token"));
//!
//! // GET customers/42
//! let mut customer = Customer::find(&client, 42).await?;
//!
//! // PUT customers/42
//! customer.phone = Some("+1 555 0100".to_string());
//! let customer = customer.save(&client).await?;
//!
//! // DELETE customers/42
//! customer.delete(&client).await?;
//! ```

mod errors;
mod path;
mod resource;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{ReadOnlyResource, RestResource};

pub(crate) use resource::serialize_to_query;
