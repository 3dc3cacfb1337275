//! Types embedded in several resources.

use serde::{Deserialize, Serialize};

/// A postal address, embedded in customers, contacts and locations.
///
/// All fields are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use fleet_api::rest::resources::Address;
///
/// let address = Address {
///     street: Some("1 Depot Road".to_string()),
///     city: Some("Leeds".to_string()),
///     country: Some("GB".to_string()),
///     ..Default::default()
/// };
/// assert!(address.postal_code.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// Street and house number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// City, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country name or code, as the server stores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_skips_missing_fields() {
        let address = Address {
            city: Some("Leeds".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            serde_json::json!({"city": "Leeds"})
        );
    }
}
