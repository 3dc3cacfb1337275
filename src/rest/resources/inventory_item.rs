//! Inventory item resource implementation.
//!
//! Inventory items are stock records (parts, accessories, child seats...)
//! identified by a caller-chosen id such as a SKU.
//!
//! Because the id is known before the item exists on the server, use
//! [`RestResource::create`] for new items; [`RestResource::save`] on an item
//! with an id always sends a PUT.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::{validate_inventory_item, InventoryItem};
//!
//! let item = InventoryItem {
//!     id: "SEAT-INF-01".to_string(),
//!     item_type: "child_seat".to_string(),
//!     quantity: 4,
//!     ..Default::default()
//! };
//!
//! if validate_inventory_item(&item) {
//!     item.create(&client).await?;
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for InventoryItem {
    type Id = String;

    const NAME: &'static str = "InventoryItem";
    const PLURAL: &'static str = "inventory";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "inventory/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "inventory"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "inventory",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "inventory/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "inventory/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        if self.id.is_empty() {
            None
        } else {
            Some(self.id.clone())
        }
    }
}

/// Checks the minimal shape of an inventory item before it is sent.
///
/// Returns `false` when `id` or `item_type` is empty or `quantity` is
/// negative. A quantity of zero is valid.
///
/// # Example
///
/// ```rust
/// use fleet_api::rest::resources::{validate_inventory_item, InventoryItem};
///
/// let mut item = InventoryItem {
///     id: "TYRE-205".to_string(),
///     item_type: "tyre".to_string(),
///     quantity: 0,
///     ..Default::default()
/// };
/// assert!(validate_inventory_item(&item));
///
/// item.quantity = -1;
/// assert!(!validate_inventory_item(&item));
/// ```
#[must_use]
pub fn validate_inventory_item(item: &InventoryItem) -> bool {
    !item.id.is_empty() && !item.item_type.is_empty() && item.quantity >= 0
}
