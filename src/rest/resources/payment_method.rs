//! Payment method resource implementation.
//!
//! Payment methods are the gateways a tenant has enabled (card, cash, bank
//! transfer...). They can only be listed.

use serde::{Deserialize, Serialize};

use crate::rest::{ReadOnlyResource, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Gateway code, e.g. `card`.
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub enabled: Option<bool>,
    #[serde(skip_serializing)]
    pub supported_currencies: Option<Vec<String>>,
}

impl RestResource for PaymentMethod {
    type Id = String;

    const NAME: &'static str = "PaymentMethod";
    const PLURAL: &'static str = "methods";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "payment-gateways/methods",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        if self.id.is_empty() {
            None
        } else {
            Some(self.id.clone())
        }
    }
}

impl ReadOnlyResource for PaymentMethod {}
