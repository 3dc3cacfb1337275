//! Path templates for REST resources.
//!
//! Every resource declares one [`ResourcePath`] per supported operation.
//! [`get_path`] picks the template for an operation and [`build_path`] fills
//! in the `{id}` placeholders.
//!
//! When a resource declares several templates for the same operation, the
//! one requiring the most ids that are all available wins. Custom actions
//! such as the contact merge endpoint keep their own template and call
//! [`build_path`] directly.
//!
//! # Example
//!
//! ```rust
//! use fleet_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use fleet_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "fleets/vehicles"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "fleets/vehicles/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "VAN-12");
//! assert_eq!(build_path(path.template, &ids), "fleets/vehicles/VAN-12");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single record by id (GET /resources/{id}).
    Find,
    /// List records (GET /resources).
    All,
    /// Create a record (POST /resources).
    Create,
    /// Replace an existing record (PUT /resources/{id}).
    Update,
    /// Delete a record (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for one REST resource operation.
///
/// Templates use `{name}` placeholders, e.g. `customers/{id}`.
///
/// # Example
///
/// ```rust
/// use fleet_api::rest::{ResourcePath, ResourceOperation};
/// use fleet_api::HttpMethod;
///
/// const CUSTOMER_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["id"],
///     "customers/{id}",
/// );
/// assert_eq!(CUSTOMER_FIND.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required id parameters, in template order.
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required ids for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required ids are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters `paths` by operation, keeps those whose required ids are all
/// available, and returns the one with the most ids.
///
/// # Example
///
/// ```rust
/// use fleet_api::rest::{ResourcePath, ResourceOperation, get_path};
/// use fleet_api::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "contacts"),
///     ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "contacts/{id}"),
/// ];
///
/// assert_eq!(get_path(PATHS, ResourceOperation::All, &[]).unwrap().template, "contacts");
/// assert!(get_path(PATHS, ResourceOperation::Delete, &[]).is_none());
/// assert!(get_path(PATHS, ResourceOperation::Update, &["id"]).is_none());
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a path from a template by interpolating ids.
///
/// Values are percent-encoded, so an id containing `/` or spaces stays a
/// single path segment. Placeholders missing from `ids` are left unchanged.
///
/// # Example
///
/// ```rust
/// use fleet_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "A/B 1");
///
/// assert_eq!(build_path("inventory/{id}", &ids), "inventory/A%2FB%201");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
