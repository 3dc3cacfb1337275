//! Location resource implementation.
//!
//! Locations are the branches and depots vehicles are picked up from and
//! returned to.
//!
//! # Read-Only Resource
//!
//! Location implements the [`ReadOnlyResource`] marker trait. It supports
//! `find` and `all` only; create, update, and delete fail with
//! [`ResourceError::PathResolutionFailed`](crate::rest::ResourceError::PathResolutionFailed)
//! without sending a request.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::Location;
//!
//! for location in Location::all(&client, None).await? {
//!     println!("{}: {:?}", location.name, location.timezone);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::{ReadOnlyResource, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::Address;

/// A rental branch or depot.
///
/// All fields are read-only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Location {
    /// The unique identifier of the location.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The display name of the location.
    #[serde(default, skip_serializing)]
    pub name: String,

    /// The postal address.
    #[serde(skip_serializing)]
    pub address: Option<Address>,

    /// Contact phone number.
    #[serde(skip_serializing)]
    pub phone: Option<String>,

    /// IANA timezone name, e.g. `Europe/London`.
    #[serde(skip_serializing)]
    pub timezone: Option<String>,

    /// Whether the location currently accepts reservations.
    #[serde(skip_serializing)]
    pub active: Option<bool>,
}

impl RestResource for Location {
    type Id = u64;

    const NAME: &'static str = "Location";
    const PLURAL: &'static str = "locations";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "fleets/locations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "fleets/locations",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ReadOnlyResource for Location {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_location_implements_read_only_resource() {
        fn assert_read_only<T: ReadOnlyResource>() {}
        assert_read_only::<Location>();
    }

    #[test]
    fn test_location_has_only_get_paths() {
        assert!(get_path(Location::PATHS, ResourceOperation::Find, &["id"]).is_some());
        assert!(get_path(Location::PATHS, ResourceOperation::All, &[]).is_some());

        assert!(get_path(Location::PATHS, ResourceOperation::Create, &[]).is_none());
        assert!(get_path(Location::PATHS, ResourceOperation::Update, &["id"]).is_none());
        assert!(get_path(Location::PATHS, ResourceOperation::Delete, &["id"]).is_none());
    }

    #[test]
    fn test_location_deserialization() {
        let json = r#"{
            "id": 3,
            "name": "Leeds Station",
            "address": {"street": "New Station St", "city": "Leeds", "postal_code": "LS1 4DY"},
            "phone": "0113 000 0000",
            "timezone": "Europe/London",
            "active": true
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();

        assert_eq!(location.id, Some(3));
        assert_eq!(location.name, "Leeds Station");
        assert_eq!(location.timezone.as_deref(), Some("Europe/London"));
        assert_eq!(location.active, Some(true));
        assert_eq!(
            location.address.and_then(|a| a.postal_code),
            Some("LS1 4DY".to_string())
        );
    }

    #[test]
    fn test_location_serialization_is_empty() {
        let location = Location {
            id: Some(3),
            name: "Leeds Station".to_string(),
            active: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&location).unwrap(),
            serde_json::json!({})
        );
    }
}
