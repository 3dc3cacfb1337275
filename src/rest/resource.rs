//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait. A resource declares its
//! name and path templates; the trait supplies `find()`, `all()`, `create()`,
//! `update()`, `save()`, `delete()` and `delete_by_id()`.
//!
//! Records travel unwrapped: the request body is the serialized record and
//! the response body is decoded straight into it.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use fleet_api::rest::{RestResource, ResourcePath, ResourceOperation};
//! use fleet_api::HttpMethod;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Vehicle {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     pub plate: String,
//! }
//!
//! impl RestResource for Vehicle {
//!     type Id = u64;
//!
//!     const NAME: &'static str = "Vehicle";
//!     const PLURAL: &'static str = "vehicles";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "fleets/vehicles/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "fleets/vehicles"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! let vehicle = Vehicle::find(&client, 12).await?;
//! let vehicles = Vehicle::all(&client, None).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{RestClient, RestError};
use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource that can be fetched, created, updated, and deleted.
///
/// Operations whose path is not declared in [`PATHS`](Self::PATHS) fail with
/// [`ResourceError::PathResolutionFailed`] without sending a request.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Customer")
/// - `PLURAL`: The plural name (e.g., "customers")
/// - `PATHS`: Available paths for different operations
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The singular name of the resource, used in error messages.
    const NAME: &'static str;

    /// The plural name of the resource.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the record's id, or `None` if it has not been created yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// find path, or the wrapped client error on failure (a missing record
    /// reports [`is_not_found`](ResourceError::is_not_found)).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let customer = Customer::find(&client, 42).await?;
    /// println!("Found: {}", customer.name);
    /// ```
    async fn find(client: &RestClient, id: Self::Id) -> Result<Self, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Find, Some(&id))?;
        Ok(client.get_json(&path, None).await?)
    }

    /// Lists records.
    ///
    /// `query` is passed through verbatim (e.g., `limit`, `offset`, filter
    /// fields). No pagination is followed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// list path, or the wrapped client error on failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "5".to_string());
    ///
    /// for customer in Customer::all(&client, Some(query)).await? {
    ///     println!("- {}", customer.name);
    /// }
    /// ```
    async fn all(
        client: &RestClient,
        query: Option<HashMap<String, String>>,
    ) -> Result<Vec<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::All, None)?;
        Ok(client.get_json(&path, query).await?)
    }

    /// Creates the record with a POST and returns the server's version.
    ///
    /// Any id on `self` is ignored; the server assigns one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// create path, or the wrapped client error on failure.
    async fn create(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Create, None)?;
        Ok(client.post_json(&path, self, None).await?)
    }

    /// Replaces the record with a PUT and returns the server's version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the record has no id.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// update path, or the wrapped client error on failure.
    async fn update(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "update",
        })?;

        let path = resolve_path::<Self>(ResourceOperation::Update, Some(&id))?;
        Ok(client.put_json(&path, self, None).await?)
    }

    /// Saves the record: [`create`](Self::create) when it has no id,
    /// [`update`](Self::update) otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let draft = Contact { id: None, name: "Ada".to_string(), ..Default::default() };
    /// let created = draft.save(&client).await?;   // POST contacts
    ///
    /// let mut contact = created;
    /// contact.company = Some("Analytical Engines".to_string());
    /// let updated = contact.save(&client).await?; // PUT contacts/{id}
    /// ```
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        if self.get_id().is_some() {
            self.update(client).await
        } else {
            self.create(client).await
        }
    }

    /// Deletes this record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the record has no id, plus the
    /// errors of [`delete_by_id`](Self::delete_by_id).
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "delete",
        })?;

        Self::delete_by_id(client, id).await
    }

    /// Deletes the record with the given id.
    ///
    /// The response body, if any, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// delete path, or the wrapped client error on failure.
    async fn delete_by_id(client: &RestClient, id: Self::Id) -> Result<(), ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Delete, Some(&id))?;
        client.delete(&path, None).await?;
        Ok(())
    }
}

/// Marker trait for resources that only support read operations.
///
/// Implemented by resources whose `PATHS` declare nothing beyond Find and
/// All, such as locations and payment methods.
pub trait ReadOnlyResource: RestResource {}

/// Resolves the concrete path for an operation on `R`.
fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    id: Option<&R::Id>,
) -> Result<String, ResourceError> {
    let mut ids: HashMap<&str, String> = HashMap::new();
    if let Some(id) = id {
        ids.insert("id", id.to_string());
    }

    let available_ids: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;

    Ok(build_path(path.template, &ids))
}

/// Serializes a params struct to a query parameter map.
///
/// `null` fields are skipped, arrays become comma-separated lists, and
/// nested objects are sent as JSON text.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value =
        serde_json::to_value(params).map_err(|source| RestError::Encode { source })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
