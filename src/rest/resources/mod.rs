//! Fleet API resources.
//!
//! Each module maps one REST endpoint family to a typed record. Records
//! implementing [`RestResource`](crate::rest::RestResource) share the CRUD
//! methods; the daily manifest and preferences are fetched through their own
//! methods because they are single documents rather than collections.
//!
//! | Resource | Path | Operations |
//! |----------|------|------------|
//! | [`Customer`] | `customers` | all, find, create, update, delete |
//! | [`InventoryItem`] | `inventory` | all, find, create, update, delete |
//! | [`Vehicle`] | `fleets/vehicles` | all, find, create, update, delete |
//! | [`Location`] | `fleets/locations` | all, find |
//! | [`RepairOrder`] | `fleets/repair-orders` | all, find, create, update, delete |
//! | [`Reservation`] | `car-rental/reservations` | all, find, create, update, delete |
//! | [`BlockedDay`] | `car-rental/blocked-days` | all, create, delete |
//! | [`Field`] | `car-rental/fields` | all, find |
//! | [`DailyManifest`] | `car-rental/daily-manifest` | fetch |
//! | [`PaymentMethod`] | `payment-gateways/methods` | all |
//! | [`Payment`] | `payment-gateways/payments` | all, find, create |
//! | [`Contact`] | `contacts` | all, find, create, update, delete, merge |
//! | [`ContactCategory`] | `contacts/categories` | all, find, create, update, delete |
//! | [`Preferences`] | `preferences` | fetch, save |
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_api::rest::RestResource;
//! use fleet_api::rest::resources::{Reservation, Vehicle};
//!
//! let vehicle = Vehicle::find(&client, 12).await?;
//! let reservations = Reservation::all(&client, None).await?;
//! ```

mod blocked_day;
mod common;
mod contact;
mod contact_category;
mod customer;
mod daily_manifest;
mod field;
mod inventory_item;
mod location;
mod payment;
mod payment_method;
mod preferences;
mod repair_order;
mod reservation;
mod vehicle;

pub use blocked_day::BlockedDay;
pub use common::Address;
pub use contact::Contact;
pub use contact_category::ContactCategory;
pub use customer::Customer;
pub use daily_manifest::{DailyManifest, ManifestParams};
pub use field::Field;
pub use inventory_item::{validate_inventory_item, InventoryItem};
pub use location::Location;
pub use payment::{Payment, PaymentStatus};
pub use payment_method::PaymentMethod;
pub use preferences::Preferences;
pub use repair_order::{RepairOrder, RepairOrderStatus};
pub use reservation::{Reservation, ReservationStatus};
pub use vehicle::{Vehicle, VehicleStatus};
