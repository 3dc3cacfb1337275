//! Reservation resource implementation.
//!
//! A reservation books one vehicle for one customer between a pickup and a
//! return.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::Reservation;
//!
//! let reservation = Reservation {
//!     customer_id: Some(42),
//!     vehicle_id: Some(12),
//!     pickup_location_id: Some(3),
//!     pickup_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
//!     return_at: Some(Utc.with_ymd_and_hms(2024, 5, 4, 17, 0, 0).unwrap()),
//!     ..Default::default()
//! };
//! let booked = reservation.create(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

/// Lifecycle of a reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
    /// A status this library does not know, kept verbatim so it is sent
    /// back unchanged.
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Reservation {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Values for the tenant's custom reservation fields, keyed by field key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for Reservation {
    type Id = u64;

    const NAME: &'static str = "Reservation";
    const PLURAL: &'static str = "reservations";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "car-rental/reservations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "car-rental/reservations",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "car-rental/reservations",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "car-rental/reservations/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "car-rental/reservations/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}
