//! Customer resource implementation.
//!
//! Customers are the people who rent vehicles.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::Customer;
//! use std::collections::HashMap;
//!
//! // GET customers?limit=5
//! let mut query = HashMap::new();
//! query.insert("limit".to_string(), "5".to_string());
//! let customers = Customer::all(&client, Some(query)).await?;
//!
//! // POST customers
//! let customer = Customer {
//!     name: "Ada Lovelace".to_string(),
//!     email: Some("ada@example.com".to_string()),
//!     phone: Some("+44 20 7946 0000".to_string()),
//!     ..Default::default()
//! };
//! let created = customer.create(&client).await?;
//! println!("Created customer {:?}", created.id);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::Address;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customer {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Customer {
    type Id = u64;

    const NAME: &'static str = "Customer";
    const PLURAL: &'static str = "customers";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "customers/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "customers"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "customers",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "customers/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "customers/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}
