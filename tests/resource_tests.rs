//! Integration tests for the Fleet API resources.
//!
//! Every resource operation is exercised against a mock server that expects
//! exactly one request with the right method and path.

use std::collections::HashMap;

use chrono::NaiveDate;
use fleet_api::rest::resources::{
    validate_inventory_item, BlockedDay, Contact, ContactCategory, Customer, DailyManifest, Field,
    InventoryItem, Location, ManifestParams, Payment, PaymentMethod, Preferences, RepairOrder,
    RepairOrderStatus, Reservation, ReservationStatus, Vehicle, VehicleStatus,
};
use fleet_api::rest::{ResourceError, RestResource};
use fleet_api::{BaseUrl, FleetConfig, RestClient};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn client_for(server: &MockServer) -> RestClient {
    let config = FleetConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();
    client.set_token(Some("test-token"));
    client
}

/// Mounts a mock expecting exactly one `verb` request to `route`.
async fn expect_once(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn expect_delete(server: &MockServer, route: &str) {
    Mock::given(method("DELETE"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(server)
        .await;
}

async fn assert_no_query(server: &MockServer) {
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.query().is_none()));
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_list_customers_with_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com"},
            {"id": 2, "name": "Alan Turing"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut query = HashMap::new();
    query.insert("limit".to_string(), "5".to_string());

    let customers = assert_ok!(Customer::all(&client, Some(query)).await);

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].id, Some(1));
    assert_eq!(customers[0].email.as_deref(), Some("ada@example.com"));
    assert_eq!(customers[1].name, "Alan Turing");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=5"));
}

#[tokio::test]
async fn test_list_customers_without_query() {
    let server = MockServer::start().await;
    expect_once(&server, "GET", "/customers", 200, json!([])).await;

    let client = client_for(&server);
    let customers = assert_ok!(Customer::all(&client, None).await);

    assert!(customers.is_empty());
    assert_no_query(&server).await;
}

#[tokio::test]
async fn test_create_customer_returns_server_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "created_at": "2024-05-01T09:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customer = Customer {
        name: "Ada Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
        phone: Some("555-0100".to_string()),
        ..Default::default()
    };

    let created = assert_ok!(customer.create(&client).await);

    assert_eq!(created.id, Some(42));
    assert_eq!(created.name, "Ada Lovelace");
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_find_update_delete_customer() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/customers/42",
        200,
        json!({"id": 42, "name": "Ada"}),
    )
    .await;
    expect_once(
        &server,
        "PUT",
        "/customers/42",
        200,
        json!({"id": 42, "name": "Ada", "phone": "555-0199"}),
    )
    .await;
    expect_delete(&server, "/customers/42").await;

    let client = client_for(&server);

    let mut customer = assert_ok!(Customer::find(&client, 42).await);
    customer.phone = Some("555-0199".to_string());

    let updated = assert_ok!(customer.update(&client).await);
    assert_eq!(updated.phone.as_deref(), Some("555-0199"));

    assert_ok!(updated.delete(&client).await);
}

#[tokio::test]
async fn test_save_picks_verb_from_id() {
    let server = MockServer::start().await;
    expect_once(&server, "POST", "/customers", 201, json!({"id": 5, "name": "New"})).await;
    expect_once(&server, "PUT", "/customers/5", 200, json!({"id": 5, "name": "Renamed"})).await;

    let client = client_for(&server);

    let created = assert_ok!(
        Customer {
            name: "New".to_string(),
            ..Default::default()
        }
        .save(&client)
        .await
    );
    assert_eq!(created.id, Some(5));

    let renamed = Customer {
        name: "Renamed".to_string(),
        ..created
    };
    let saved = assert_ok!(renamed.save(&client).await);
    assert_eq!(saved.name, "Renamed");
}

#[tokio::test]
async fn test_update_without_id_fails_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = assert_err!(Customer::default().update(&client).await);

    assert!(matches!(error, ResourceError::MissingId { operation: "update", .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_missing_customer_is_not_found() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/customers/999",
        404,
        json!({"message": "Customer not found"}),
    )
    .await;

    let client = client_for(&server);
    let error = assert_err!(Customer::find(&client, 999).await);

    assert!(error.is_not_found());
    assert_eq!(error.body(), Some(&json!({"message": "Customer not found"})));
}

#[tokio::test]
async fn test_create_validation_error_exposes_fields() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "POST",
        "/customers",
        422,
        json!({"errors": {"email": ["is invalid"]}}),
    )
    .await;

    let client = client_for(&server);
    let customer = Customer {
        name: "Ada".to_string(),
        email: Some("nope".to_string()),
        ..Default::default()
    };

    let error = assert_err!(customer.create(&client).await);

    assert_eq!(error.status(), Some(422));
    assert_eq!(
        error.validation_errors().get("email"),
        Some(&vec!["is invalid".to_string()])
    );
}

// ============================================================================
// Inventory
// ============================================================================

#[tokio::test]
async fn test_inventory_crud() {
    let server = MockServer::start().await;
    let item = json!({"id": "SEAT-1", "type": "child_seat", "quantity": 4});

    expect_once(&server, "GET", "/inventory", 200, json!([item.clone()])).await;
    expect_once(&server, "GET", "/inventory/SEAT-1", 200, item.clone()).await;
    expect_once(&server, "POST", "/inventory", 201, item.clone()).await;
    expect_once(&server, "PUT", "/inventory/SEAT-1", 200, item).await;
    expect_delete(&server, "/inventory/SEAT-1").await;

    let client = client_for(&server);

    let items = assert_ok!(InventoryItem::all(&client, None).await);
    assert_eq!(items[0].item_type, "child_seat");

    let found = assert_ok!(InventoryItem::find(&client, "SEAT-1".to_string()).await);
    assert!(validate_inventory_item(&found));

    assert_ok!(found.create(&client).await);
    assert_ok!(found.update(&client).await);
    assert_ok!(InventoryItem::delete_by_id(&client, "SEAT-1".to_string()).await);
}

#[test]
fn test_inventory_validator_boundaries() {
    let valid = InventoryItem {
        id: "TYRE-205".to_string(),
        item_type: "tyre".to_string(),
        quantity: 0,
        ..Default::default()
    };
    assert!(validate_inventory_item(&valid));

    assert!(!validate_inventory_item(&InventoryItem {
        id: String::new(),
        ..valid.clone()
    }));
    assert!(!validate_inventory_item(&InventoryItem {
        item_type: String::new(),
        ..valid.clone()
    }));
    assert!(!validate_inventory_item(&InventoryItem {
        quantity: -1,
        ..valid
    }));
}

// ============================================================================
// Fleets
// ============================================================================

#[tokio::test]
async fn test_vehicle_crud() {
    let server = MockServer::start().await;
    let vehicle = json!({"id": 12, "license_plate": "AB12 CDE", "status": "available"});

    expect_once(&server, "GET", "/fleets/vehicles", 200, json!([vehicle.clone()])).await;
    expect_once(&server, "GET", "/fleets/vehicles/12", 200, vehicle.clone()).await;
    expect_once(&server, "POST", "/fleets/vehicles", 201, vehicle.clone()).await;
    expect_once(&server, "PUT", "/fleets/vehicles/12", 200, vehicle).await;
    expect_delete(&server, "/fleets/vehicles/12").await;

    let client = client_for(&server);

    let vehicles = assert_ok!(Vehicle::all(&client, None).await);
    assert_eq!(vehicles[0].status, Some(VehicleStatus::Available));

    let vehicle = assert_ok!(Vehicle::find(&client, 12).await);
    let created = assert_ok!(
        Vehicle {
            license_plate: Some("AB12 CDE".to_string()),
            ..Default::default()
        }
        .create(&client)
        .await
    );
    assert_eq!(created.id, Some(12));

    assert_ok!(vehicle.update(&client).await);
    assert_ok!(Vehicle::delete_by_id(&client, 12).await);
}

#[tokio::test]
async fn test_unrecognized_status_survives_find_then_save() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/fleets/vehicles/7",
        200,
        json!({"id": 7, "status": "in_transit", "make": "VW"}),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/fleets/vehicles/7"))
        .and(body_json(json!({"make": "VW", "status": "in_transit"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 7, "status": "in_transit", "make": "VW"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let vehicle = assert_ok!(Vehicle::find(&client, 7).await);
    assert_eq!(
        vehicle.status,
        Some(VehicleStatus::Other("in_transit".to_string()))
    );

    let saved = assert_ok!(vehicle.save(&client).await);
    assert_eq!(saved.id, Some(7));
}

#[tokio::test]
async fn test_locations_are_read_only() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/fleets/locations",
        200,
        json!([{"id": 3, "name": "Leeds Station"}]),
    )
    .await;
    expect_once(
        &server,
        "GET",
        "/fleets/locations/3",
        200,
        json!({"id": 3, "name": "Leeds Station"}),
    )
    .await;

    let client = client_for(&server);

    let locations = assert_ok!(Location::all(&client, None).await);
    assert_eq!(locations[0].name, "Leeds Station");

    let location = assert_ok!(Location::find(&client, 3).await);

    let error = assert_err!(location.delete(&client).await);
    assert!(matches!(
        error,
        ResourceError::PathResolutionFailed {
            resource: "Location",
            operation: "delete"
        }
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_repair_order_crud() {
    let server = MockServer::start().await;
    let order = json!({"id": 88, "vehicle_id": 12, "status": "open"});

    expect_once(&server, "GET", "/fleets/repair-orders", 200, json!([order.clone()])).await;
    expect_once(&server, "GET", "/fleets/repair-orders/88", 200, order.clone()).await;
    expect_once(&server, "POST", "/fleets/repair-orders", 201, order.clone()).await;
    expect_once(
        &server,
        "PUT",
        "/fleets/repair-orders/88",
        200,
        json!({"id": 88, "vehicle_id": 12, "status": "completed"}),
    )
    .await;
    expect_delete(&server, "/fleets/repair-orders/88").await;

    let client = client_for(&server);

    assert_ok!(RepairOrder::all(&client, None).await);
    let mut order = assert_ok!(RepairOrder::find(&client, 88).await);
    assert_ok!(
        RepairOrder {
            vehicle_id: Some(12),
            ..Default::default()
        }
        .create(&client)
        .await
    );

    order.status = Some(RepairOrderStatus::Completed);
    let updated = assert_ok!(order.update(&client).await);
    assert_eq!(updated.status, Some(RepairOrderStatus::Completed));

    assert_ok!(updated.delete(&client).await);
}

// ============================================================================
// Car rental
// ============================================================================

#[tokio::test]
async fn test_reservation_crud() {
    let server = MockServer::start().await;
    let reservation = json!({"id": 501, "customer_id": 42, "status": "pending"});

    Mock::given(method("GET"))
        .and(path("/car-rental/reservations"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([reservation.clone()])))
        .expect(1)
        .mount(&server)
        .await;
    expect_once(&server, "GET", "/car-rental/reservations/501", 200, reservation.clone()).await;
    expect_once(&server, "POST", "/car-rental/reservations", 201, reservation).await;
    expect_once(
        &server,
        "PUT",
        "/car-rental/reservations/501",
        200,
        json!({"id": 501, "customer_id": 42, "status": "confirmed"}),
    )
    .await;
    expect_delete(&server, "/car-rental/reservations/501").await;

    let client = client_for(&server);

    let mut query = HashMap::new();
    query.insert("status".to_string(), "pending".to_string());
    let pending = assert_ok!(Reservation::all(&client, Some(query)).await);
    assert_eq!(pending.len(), 1);

    let mut reservation = assert_ok!(Reservation::find(&client, 501).await);
    assert_ok!(
        Reservation {
            customer_id: Some(42),
            ..Default::default()
        }
        .create(&client)
        .await
    );

    reservation.status = Some(ReservationStatus::Confirmed);
    let confirmed = assert_ok!(reservation.save(&client).await);
    assert_eq!(confirmed.status, Some(ReservationStatus::Confirmed));

    assert_ok!(Reservation::delete_by_id(&client, 501).await);
}

#[tokio::test]
async fn test_blocked_days() {
    let server = MockServer::start().await;

    expect_once(
        &server,
        "GET",
        "/car-rental/blocked-days",
        200,
        json!([{"id": 4, "date": "2024-12-25"}]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/car-rental/blocked-days"))
        .and(body_json(json!({"date": "2024-12-26", "reason": "Boxing Day"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "date": "2024-12-26",
            "reason": "Boxing Day"
        })))
        .expect(1)
        .mount(&server)
        .await;
    expect_delete(&server, "/car-rental/blocked-days/4").await;

    let client = client_for(&server);

    let days = assert_ok!(BlockedDay::all(&client, None).await);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 12, 25));

    let created = assert_ok!(
        BlockedDay {
            date: NaiveDate::from_ymd_opt(2024, 12, 26),
            reason: Some("Boxing Day".to_string()),
            ..Default::default()
        }
        .create(&client)
        .await
    );
    assert_eq!(created.id, Some(5));

    assert_ok!(days[0].delete(&client).await);

    let error = assert_err!(BlockedDay::find(&client, 4).await);
    assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));
}

#[tokio::test]
async fn test_fields() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/car-rental/fields",
        200,
        json!([{"key": "flight_number", "type": "text"}]),
    )
    .await;
    expect_once(
        &server,
        "GET",
        "/car-rental/fields/flight_number",
        200,
        json!({"key": "flight_number", "type": "text", "required": true}),
    )
    .await;

    let client = client_for(&server);

    let fields = assert_ok!(Field::all(&client, None).await);
    assert_eq!(fields[0].key, "flight_number");

    let field = assert_ok!(Field::find(&client, "flight_number".to_string()).await);
    assert_eq!(field.required, Some(true));
}

#[tokio::test]
async fn test_daily_manifest_with_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/car-rental/daily-manifest"))
        .and(query_param("date", "2024-05-01"))
        .and(query_param("location", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date": "2024-05-01",
            "location_id": 3,
            "pickups": [{"reservation_id": 501, "at": "09:00"}],
            "returns": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ManifestParams {
        date: NaiveDate::from_ymd_opt(2024, 5, 1),
        location: Some(3),
    };

    let manifest = assert_ok!(DailyManifest::fetch(&client, Some(params)).await);

    assert_eq!(manifest.pickups.len(), 1);
    assert_eq!(manifest.pickups[0]["reservation_id"], 501);
    assert!(manifest.returns.is_empty());
}

#[tokio::test]
async fn test_daily_manifest_without_params_has_no_query() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/car-rental/daily-manifest",
        200,
        json!({"pickups": [], "returns": []}),
    )
    .await;

    let client = client_for(&server);

    assert_ok!(DailyManifest::fetch(&client, Some(ManifestParams::default())).await);
    assert_no_query(&server).await;
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn test_payment_methods() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "GET",
        "/payment-gateways/methods",
        200,
        json!([{"id": "card", "name": "Credit card", "enabled": true}]),
    )
    .await;

    let client = client_for(&server);

    let methods = assert_ok!(PaymentMethod::all(&client, None).await);
    assert_eq!(methods[0].id, "card");

    let error = assert_err!(PaymentMethod::find(&client, "card".to_string()).await);
    assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));
}

#[tokio::test]
async fn test_payments() {
    let server = MockServer::start().await;
    let payment = json!({"id": 9, "reservation_id": 501, "amount": 189.99, "status": "succeeded"});

    expect_once(&server, "GET", "/payment-gateways/payments", 200, json!([payment.clone()])).await;
    expect_once(&server, "GET", "/payment-gateways/payments/9", 200, payment.clone()).await;
    Mock::given(method("POST"))
        .and(path("/payment-gateways/payments"))
        .and(body_json(json!({"reservation_id": 501, "method_id": "card", "amount": 189.99})))
        .respond_with(ResponseTemplate::new(201).set_body_json(payment))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_ok!(Payment::all(&client, None).await);
    assert_ok!(Payment::find(&client, 9).await);

    let created = assert_ok!(
        Payment {
            reservation_id: Some(501),
            method_id: Some("card".to_string()),
            amount: Some(189.99),
            ..Default::default()
        }
        .create(&client)
        .await
    );
    assert_eq!(created.id, Some(9));

    let error = assert_err!(created.delete(&client).await);
    assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn test_contact_crud_and_merge() {
    let server = MockServer::start().await;
    let contact = json!({"id": 10, "name": "Northern Tyres"});

    expect_once(&server, "GET", "/contacts", 200, json!([contact.clone()])).await;
    expect_once(&server, "GET", "/contacts/10", 200, contact.clone()).await;
    expect_once(&server, "POST", "/contacts", 201, contact.clone()).await;
    expect_once(&server, "PUT", "/contacts/10", 200, contact.clone()).await;
    Mock::given(method("POST"))
        .and(path("/contacts/10/merge"))
        .and(body_json(json!({"contact_ids": [11, 12]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact))
        .expect(1)
        .mount(&server)
        .await;
    expect_delete(&server, "/contacts/10").await;

    let client = client_for(&server);

    assert_ok!(Contact::all(&client, None).await);
    let found = assert_ok!(Contact::find(&client, 10).await);
    assert_ok!(
        Contact {
            name: "Northern Tyres".to_string(),
            ..Default::default()
        }
        .create(&client)
        .await
    );
    assert_ok!(found.update(&client).await);

    let merged = assert_ok!(found.merge(&client, &[11, 12]).await);
    assert_eq!(merged.id, Some(10));

    assert_ok!(merged.delete(&client).await);
}

#[tokio::test]
async fn test_contact_category_crud() {
    let server = MockServer::start().await;
    let category = json!({"id": 2, "name": "Suppliers", "contact_count": 14});

    expect_once(&server, "GET", "/contacts/categories", 200, json!([category.clone()])).await;
    expect_once(&server, "GET", "/contacts/categories/2", 200, category.clone()).await;
    expect_once(&server, "POST", "/contacts/categories", 201, category.clone()).await;
    expect_once(&server, "PUT", "/contacts/categories/2", 200, category).await;
    expect_delete(&server, "/contacts/categories/2").await;

    let client = client_for(&server);

    let categories = assert_ok!(ContactCategory::all(&client, None).await);
    assert_eq!(categories[0].contact_count, Some(14));

    let category = assert_ok!(ContactCategory::find(&client, 2).await);
    assert_ok!(
        ContactCategory {
            name: "Suppliers".to_string(),
            ..Default::default()
        }
        .create(&client)
        .await
    );
    assert_ok!(category.update(&client).await);
    assert_ok!(ContactCategory::delete_by_id(&client, 2).await);
}

// ============================================================================
// Preferences
// ============================================================================

#[tokio::test]
async fn test_preferences_fetch_and_save() {
    let server = MockServer::start().await;

    expect_once(
        &server,
        "GET",
        "/preferences",
        200,
        json!({"currency": "GBP", "grace_minutes": 30}),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/preferences"))
        .and(body_json(json!({"currency": "EUR", "grace_minutes": 30})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"currency": "EUR", "grace_minutes": 30})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let mut preferences = assert_ok!(Preferences::fetch(&client).await);
    assert_eq!(preferences.get("currency"), Some(&json!("GBP")));

    preferences.set("currency", "EUR");
    let saved = assert_ok!(preferences.save(&client).await);
    assert_eq!(saved.get("currency"), Some(&json!("EUR")));
}

#[tokio::test]
async fn test_mutating_error_exposes_status_and_body() {
    let server = MockServer::start().await;
    expect_once(
        &server,
        "PUT",
        "/preferences",
        409,
        json!({"message": "Preferences were changed by another user"}),
    )
    .await;

    let client = client_for(&server);

    let error = assert_err!(Preferences::default().save(&client).await);
    assert_eq!(error.status(), Some(409));
    assert_eq!(
        error.body(),
        Some(&json!({"message": "Preferences were changed by another user"}))
    );
}

#[tokio::test]
async fn test_network_failure_surfaces_without_status() {
    let config = FleetConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    let error = assert_err!(Vehicle::all(&client, None).await);
    assert!(error.status().is_none());
    assert!(error.body().is_none());
}
