//! Tenant preferences.
//!
//! Preferences are a single settings document per tenant. Keys and values
//! are server-defined, so the document is kept as a JSON object and read
//! with [`Preferences::get`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::resources::Preferences;
//!
//! let mut preferences = Preferences::fetch(&client).await?;
//! preferences.set("currency", "EUR");
//! let saved = preferences.save(&client).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::ResourceError;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct Preferences {
    pub values: Map<String, Value>,
}

impl Preferences {
    /// Path of the preferences endpoint.
    pub const PATH: &'static str = "preferences";

    /// Fetches the current preferences.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails or the body is
    /// not a JSON object.
    pub async fn fetch(client: &RestClient) -> Result<Self, ResourceError> {
        Ok(client.get_json(Self::PATH, None).await?)
    }

    /// Replaces the stored preferences with this document and returns the
    /// server's version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        Ok(client.put_json(Self::PATH, self, None).await?)
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Sets `key` to `value`, replacing any previous value. Call
    /// [`save`](Self::save) to send the change.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preferences_are_a_plain_object() {
        let preferences: Preferences =
            serde_json::from_value(json!({"currency": "GBP", "grace_minutes": 30})).unwrap();

        assert_eq!(preferences.get("currency"), Some(&json!("GBP")));
        assert_eq!(preferences.get("grace_minutes"), Some(&json!(30)));
        assert!(preferences.get("missing").is_none());
    }

    #[test]
    fn test_set_then_serialize() {
        let mut preferences = Preferences::default();
        preferences.set("currency", "EUR");
        preferences.set("require_deposit", true);

        assert_eq!(
            serde_json::to_value(&preferences).unwrap(),
            json!({"currency": "EUR", "require_deposit": true})
        );
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_value::<Preferences>(json!([1, 2])).is_err());
    }
}
