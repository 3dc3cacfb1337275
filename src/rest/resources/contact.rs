//! Contact resource implementation.
//!
//! Contacts are address-book entries (suppliers, corporate accounts,
//! insurers...). Besides CRUD they support merging duplicates into one
//! record.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::Contact;
//!
//! let keep = Contact::find(&client, 10).await?;
//!
//! // POST contacts/10/merge {"contact_ids": [11, 12]}
//! let merged = keep.merge(&client, &[11, 12]).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{build_path, ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::Address;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Contact {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Contact {
    type Id = u64;

    const NAME: &'static str = "Contact";
    const PLURAL: &'static str = "contacts";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "contacts/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "contacts"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "contacts"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "contacts/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "contacts/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Contact {
    /// Template of the merge endpoint.
    pub const MERGE_PATH: &'static str = "contacts/{id}/merge";

    /// Merges the given contacts into this one and returns the surviving
    /// record.
    ///
    /// The merged contacts are removed server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if this contact has no id.
    pub async fn merge(
        &self,
        client: &RestClient,
        duplicate_ids: &[u64],
    ) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "merge",
        })?;

        Self::merge_by_id(client, id, duplicate_ids).await
    }

    /// Merges `duplicate_ids` into the contact with id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn merge_by_id(
        client: &RestClient,
        id: u64,
        duplicate_ids: &[u64],
    ) -> Result<Self, ResourceError> {
        let mut ids = HashMap::new();
        ids.insert("id", id);

        let path = build_path(Self::MERGE_PATH, &ids);
        let body = serde_json::json!({ "contact_ids": duplicate_ids });

        Ok(client.post_json(&path, &body, None).await?)
    }
}
