//! Daily manifest: the pickups and returns scheduled for one day.
//!
//! The manifest is a computed report rather than a stored record, so it is
//! fetched with [`DailyManifest::fetch`] instead of through
//! [`RestResource`](crate::rest::RestResource).
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use fleet_api::rest::resources::{DailyManifest, ManifestParams};
//!
//! let params = ManifestParams {
//!     date: NaiveDate::from_ymd_opt(2024, 5, 1),
//!     location: Some(3),
//! };
//!
//! // GET car-rental/daily-manifest?date=2024-05-01&location=3
//! let manifest = DailyManifest::fetch(&client, Some(params)).await?;
//! println!("{} pickups, {} returns", manifest.pickups.len(), manifest.returns.len());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{serialize_to_query, ResourceError};

/// Pickups and returns for one day.
///
/// Entries are kept as raw JSON. Each is expected to carry at least a
/// `reservation_id` and a scheduled time; everything else is server-defined.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DailyManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(default)]
    pub pickups: Vec<serde_json::Value>,
    #[serde(default)]
    pub returns: Vec<serde_json::Value>,
}

/// Query parameters for [`DailyManifest::fetch`].
///
/// Unset fields are left out of the query string; the server then applies
/// its own defaults (today, all locations).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ManifestParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u64>,
}

impl DailyManifest {
    /// Path of the manifest endpoint.
    pub const PATH: &'static str = "car-rental/daily-manifest";

    /// Fetches the manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails or the body is
    /// not a manifest.
    pub async fn fetch(
        client: &RestClient,
        params: Option<ManifestParams>,
    ) -> Result<Self, ResourceError> {
        let query = params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        Ok(client.get_json(Self::PATH, query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_params_to_query() {
        let params = ManifestParams {
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
            location: Some(3),
        };

        let query = serialize_to_query(&params).unwrap();
        assert_eq!(query.get("date"), Some(&"2024-05-01".to_string()));
        assert_eq!(query.get("location"), Some(&"3".to_string()));
    }

    #[test]
    fn test_empty_manifest_params_produce_empty_query() {
        let query = serialize_to_query(&ManifestParams::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_manifest_deserialization_defaults_missing_lists() {
        let manifest: DailyManifest = serde_json::from_value(serde_json::json!({
            "date": "2024-05-01",
            "pickups": [{"reservation_id": 501, "at": "09:00"}]
        }))
        .unwrap();

        assert_eq!(manifest.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(manifest.pickups.len(), 1);
        assert!(manifest.returns.is_empty());
    }
}
