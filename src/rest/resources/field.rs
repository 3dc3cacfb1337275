//! Reservation field resource implementation.
//!
//! Fields describe the custom inputs a tenant collects on reservations
//! (flight number, extra drivers...). They are identified by key and are
//! read-only through the API.

use serde::{Deserialize, Serialize};

use crate::rest::{ReadOnlyResource, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

/// A custom reservation field definition.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Field {
    /// Stable key used in `Reservation::custom_fields`.
    #[serde(default, skip_serializing)]
    pub key: String,

    /// Human-readable label.
    #[serde(skip_serializing)]
    pub label: Option<String>,

    /// Input type such as `text`, `number` or `select`.
    #[serde(rename = "type", skip_serializing)]
    pub field_type: Option<String>,

    /// Whether a reservation must supply a value.
    #[serde(skip_serializing)]
    pub required: Option<bool>,

    /// Allowed values for `select` fields; shape is server-defined.
    #[serde(skip_serializing)]
    pub options: Option<serde_json::Value>,
}

impl RestResource for Field {
    type Id = String;

    const NAME: &'static str = "Field";
    const PLURAL: &'static str = "fields";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "car-rental/fields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "car-rental/fields",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        if self.key.is_empty() {
            None
        } else {
            Some(self.key.clone())
        }
    }
}

impl ReadOnlyResource for Field {}
