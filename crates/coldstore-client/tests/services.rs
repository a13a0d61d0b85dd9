#![allow(clippy::unwrap_used)]

mod common;

use std::collections::BTreeMap;
use std::time::Duration;

use axum::http::Method;
use coldstore_client::{ApiClient, ClientConfig, ClientError, Dashboard, RetryPolicy};
use coldstore_core::models::{
    BookingStatus, GeoPoint, MaintenanceStatus, NewBooking, NewWarehouse, SensorType,
    StorageUnit, WarehousePatch, WarehouseStatus, remove_by_id,
};
use serde_json::json;

use common::{MockServer, booking_json, reading_json, unit_json, warehouse_json};

fn new_warehouse(name: &str) -> NewWarehouse {
    NewWarehouse {
        owner_id: 1,
        name: name.to_string(),
        address: "12 Harbour Rd".to_string(),
        status: WarehouseStatus::Active,
        location: GeoPoint::new(126.97, 37.56),
        operating_hours: BTreeMap::new(),
        amenities: vec!["loading_dock".to_string()],
    }
}

// =========================================================================
// Primitives through services
// =========================================================================

#[tokio::test]
async fn get_by_id_targets_item_path() {
    let server = MockServer::start().await;
    server.stub_ok(Method::GET, "/warehouses/1", warehouse_json(1, "North"));

    let w = server.client().warehouses().get_by_id(1).await.unwrap();

    assert_eq!(w.warehouse_id, 1);
    assert_eq!(w.name, "North");
    let req = server.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/warehouses/1");
    assert!(req.body.is_none());
}

#[tokio::test]
async fn create_posts_serialized_body_and_returns_created_entity() {
    let server = MockServer::start().await;
    server.stub_ok(Method::POST, "/warehouses", warehouse_json(1, "A"));

    let created = server
        .client()
        .warehouses()
        .create(&new_warehouse("A"))
        .await
        .unwrap();

    assert_eq!(created.warehouse_id, 1);
    let req = server.last_request();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/warehouses");
    let body = req.body.unwrap();
    assert_eq!(body["name"], "A");
    assert_eq!(body["ownerId"], 1);
    assert_eq!(body["location"]["type"], "Point");
}

#[tokio::test]
async fn update_puts_only_patched_fields() {
    let server = MockServer::start().await;
    server.stub_ok(Method::PUT, "/warehouses/4", warehouse_json(4, "Renamed"));

    let patch = WarehousePatch {
        name: Some("Renamed".into()),
        ..Default::default()
    };
    let w = server
        .client()
        .warehouses()
        .update(4, &patch)
        .await
        .unwrap();

    assert_eq!(w.name, "Renamed");
    assert_eq!(server.last_request().body.unwrap(), json!({ "name": "Renamed" }));
}

#[tokio::test]
async fn non_success_status_is_an_api_error_with_server_message() {
    let server = MockServer::start().await;
    server.stub(
        Method::GET,
        "/users/9",
        404,
        &json!({ "success": false, "message": "User not found" }),
    );

    let err = server.client().users().get_by_id(9).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_json_body_falls_back_to_reason() {
    let server = MockServer::start().await;
    server.stub_raw(Method::GET, "/payments", 502, "<html>bad gateway</html>");

    let err = server.client().payments().get_all().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(err.to_string().contains("Bad Gateway"), "{err}");
}

#[tokio::test]
async fn unsuccessful_envelope_is_an_error_even_on_200() {
    let server = MockServer::start().await;
    server.stub(
        Method::GET,
        "/payments/3",
        200,
        &json!({ "success": false, "message": "Payment locked" }),
    );

    let err = server.client().payments().get_by_id(3).await.unwrap_err();

    match err {
        ClientError::Unsuccessful { message } => assert_eq!(message, "Payment locked"),
        other => panic!("expected Unsuccessful, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_does_not_read_the_body() {
    let server = MockServer::start().await;
    server.stub_raw(Method::DELETE, "/storage-units/7", 200, "not json at all");

    server.client().storage_units().delete(7).await.unwrap();

    let req = server.last_request();
    assert_eq!(req.method, Method::DELETE);
    assert_eq!(req.path, "/storage-units/7");
}

#[tokio::test]
async fn failed_delete_leaves_local_list_untouched() {
    let server = MockServer::start().await;
    server.stub(Method::DELETE, "/storage-units/7", 500, &json!({ "message": "boom" }));

    let mut units: Vec<StorageUnit> = [unit_json(6, 1, "available"), unit_json(7, 1, "occupied")]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();

    let service = server.client().storage_units();
    let result = service.delete(7).await;
    if result.is_ok() {
        remove_by_id(&mut units, &7);
    }

    assert_eq!(result.unwrap_err().status(), Some(500));
    assert_eq!(units.len(), 2);
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_request() {
    let server = MockServer::start().await;

    let err = server
        .client()
        .warehouses()
        .create(&new_warehouse("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "{err:?}");

    let booking = NewBooking {
        customer_id: 1,
        warehouse_id: 1,
        start_date: "2025-03-01".into(),
        end_date: "2025-03-08".into(),
        status: BookingStatus::Pending,
        notes: None,
        units: Vec::new(),
    };
    let err = server.client().bookings().create(&booking).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "{err:?}");

    assert!(server.requests().is_empty());
}

// =========================================================================
// Retry
// =========================================================================

#[tokio::test]
async fn transient_failure_is_retried_when_enabled() {
    let server = MockServer::start().await;
    server.stub(Method::GET, "/users", 503, &json!({ "message": "warming up" }));
    server.stub_ok(Method::GET, "/users", json!([]));

    let config = ClientConfig {
        retry: RetryPolicy {
            max_attempts: 2,
            initial_delay: Duration::from_millis(10),
            ..Default::default()
        },
        ..ClientConfig::new(&server.base_url)
    };
    let client = ApiClient::new(&config).unwrap();

    let users = client.users().get_all().await.unwrap();

    assert!(users.is_empty());
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn default_client_does_not_retry() {
    let server = MockServer::start().await;
    server.stub(Method::GET, "/users", 503, &json!({ "message": "warming up" }));
    server.stub_ok(Method::GET, "/users", json!([]));

    let err = server.client().users().get_all().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    server.stub(Method::GET, "/users/1", 400, &json!({ "message": "bad id" }));

    let config = ClientConfig {
        retry: RetryPolicy {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1),
            ..Default::default()
        },
        ..ClientConfig::new(&server.base_url)
    };
    let err = ApiClient::new(&config)
        .unwrap()
        .users()
        .get_by_id(1)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn create_is_not_retried() {
    let server = MockServer::start().await;
    server.stub(Method::POST, "/warehouses", 503, &json!({ "message": "warming up" }));
    server.stub_ok(Method::POST, "/warehouses", warehouse_json(9, "North"));

    let config = ClientConfig {
        retry: RetryPolicy {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1),
            ..Default::default()
        },
        ..ClientConfig::new(&server.base_url)
    };
    let err = ApiClient::new(&config)
        .unwrap()
        .warehouses()
        .create(&new_warehouse("North"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(server.requests().len(), 1);
}

// =========================================================================
// Get by id across every resource
// =========================================================================

fn entity_json(endpoint: &str) -> serde_json::Value {
    match endpoint {
        "/warehouses" => warehouse_json(5, "North"),
        "/storage-units" => unit_json(5, 1, "available"),
        "/bookings" => booking_json(5, 42, "pending"),
        "/payments" => json!({
            "paymentId": 5, "bookingId": 1, "amount": "120.00",
            "paymentMethod": "credit_card", "status": "pending"
        }),
        "/users" => json!({
            "userId": 5, "name": "Kim", "email": "kim@example.com",
            "role": "customer", "status": "active"
        }),
        "/maintenance" => json!({
            "maintenanceId": 5, "warehouseId": 1, "type": "corrective",
            "status": "scheduled", "priority": "high",
            "description": "compressor", "startDate": "2025-04-01"
        }),
        "/notifications" => json!({
            "notificationId": 5, "userId": 1, "type": "alert",
            "title": "Too warm", "message": "Unit 3 is above range"
        }),
        "/mongodb/readings" => reading_json("5", "1", -18.0),
        "/iot/sensors" => json!({
            "sensorId": 5, "unitId": 1, "sensorType": "temperature", "status": "active"
        }),
        other => panic!("no fixture for {other}"),
    }
}

async fn get_five(client: &ApiClient, endpoint: &str) -> Result<(), ClientError> {
    match endpoint {
        "/warehouses" => client.warehouses().get_by_id(5).await.map(drop),
        "/storage-units" => client.storage_units().get_by_id(5).await.map(drop),
        "/bookings" => client.bookings().get_by_id(5).await.map(drop),
        "/payments" => client.payments().get_by_id(5).await.map(drop),
        "/users" => client.users().get_by_id(5).await.map(drop),
        "/maintenance" => client.maintenance().get_by_id(5).await.map(drop),
        "/notifications" => client.notifications().get_by_id(5).await.map(drop),
        "/mongodb/readings" => client.readings().get_by_id("5").await.map(drop),
        "/iot/sensors" => client.iot().get_sensor_by_id(5).await.map(drop),
        other => panic!("no service for {other}"),
    }
}

const RESOURCE_ENDPOINTS: [&str; 9] = [
    "/warehouses",
    "/storage-units",
    "/bookings",
    "/payments",
    "/users",
    "/maintenance",
    "/notifications",
    "/mongodb/readings",
    "/iot/sensors",
];

#[tokio::test]
async fn every_service_gets_by_id_under_its_endpoint() {
    for endpoint in RESOURCE_ENDPOINTS {
        let path = format!("{endpoint}/5");

        let server = MockServer::start().await;
        server.stub_ok(Method::GET, &path, entity_json(endpoint));
        let client = server.client();

        get_five(&client, endpoint)
            .await
            .unwrap_or_else(|e| panic!("{endpoint}: {e:?}"));
        let request = server.last_request();
        assert_eq!(request.method, Method::GET, "{endpoint}");
        assert_eq!(request.path, path, "{endpoint}");

        let server = MockServer::start().await;
        server.stub(Method::GET, &path, 500, &json!({ "message": "boom" }));
        let client = server.client();

        let err = get_five(&client, endpoint).await.unwrap_err();
        assert_eq!(err.status(), Some(500), "{endpoint}");
        assert_eq!(server.last_request().path, path, "{endpoint}");
    }
}

#[tokio::test]
async fn envelope_without_data_is_an_error() {
    let server = MockServer::start().await;
    server.stub_raw(Method::GET, "/users/1", 200, r#"{"success":true}"#);

    let err = server.client().users().get_by_id(1).await.unwrap_err();

    assert!(matches!(err, ClientError::Unsuccessful { .. }), "{err:?}");
}

// =========================================================================
// Resource-specific routes
// =========================================================================

#[tokio::test]
async fn bookings_by_customer() {
    let server = MockServer::start().await;
    server.stub_ok(
        Method::GET,
        "/bookings/customer/42",
        json!([booking_json(1, 42, "pending"), booking_json(2, 42, "confirmed")]),
    );

    let bookings = server
        .client()
        .bookings()
        .get_by_customer_id(42)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b.customer_id == 42));
    assert_eq!(server.last_request().path, "/bookings/customer/42");
}

#[tokio::test]
async fn booking_status_update_sends_single_field() {
    let server = MockServer::start().await;
    server.stub_ok(Method::PUT, "/bookings/5", booking_json(5, 1, "cancelled"));

    let b = server
        .client()
        .bookings()
        .update_status(5, BookingStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(b.status, BookingStatus::Cancelled);
    assert_eq!(
        server.last_request().body.unwrap(),
        json!({ "status": "cancelled" })
    );
}

#[tokio::test]
async fn nearby_sends_coordinates_as_query() {
    let server = MockServer::start().await;
    server.stub_ok(
        Method::GET,
        "/warehouses/nearby",
        json!([{
            "id": 3, "name": "Port", "address": "1 Dock St", "distance": 1.2,
            "costPerHour": 3.5, "availableUnits": 4, "totalUnits": 10,
            "status": "active", "latitude": 37.5, "longitude": 127.0
        }]),
    );

    let found = server
        .client()
        .warehouses()
        .nearby(37.5, 127.0, Some(10.0))
        .await
        .unwrap();

    assert_eq!(found[0].id, 3);
    assert_eq!(found[0].available_units, 4);
    let req = server.last_request();
    assert_eq!(req.path, "/warehouses/nearby");
    assert_eq!(
        req.query.as_deref(),
        Some("latitude=37.5&longitude=127&maxDistanceKm=10")
    );
}

#[tokio::test]
async fn maintenance_status_uses_dedicated_route() {
    let server = MockServer::start().await;
    server.stub_ok(
        Method::PUT,
        "/maintenance/status/8",
        json!({
            "maintenanceId": 8, "warehouseId": 1, "unitId": 3, "type": "corrective",
            "status": "completed", "priority": "high", "description": "Compressor",
            "startDate": "2025-02-01T00:00:00Z"
        }),
    );

    let m = server
        .client()
        .maintenance()
        .update_status(8, MaintenanceStatus::Completed)
        .await
        .unwrap();

    assert_eq!(m.status, MaintenanceStatus::Completed);
    assert_eq!(
        server.last_request().body.unwrap(),
        json!({ "status": "completed" })
    );
}

#[tokio::test]
async fn notification_read_routes() {
    let server = MockServer::start().await;
    server.stub_ok(
        Method::PUT,
        "/notifications/read/11",
        json!({
            "notificationId": 11, "userId": 42, "type": "alert",
            "title": "Temp", "message": "Unit 3 too warm", "isRead": true
        }),
    );
    server.stub_ok(Method::PUT, "/notifications/read-all/42", json!({ "count": 5 }));
    server.stub_ok(Method::GET, "/notifications/unread-count/42", json!({ "count": 0 }));

    let notifications = server.client().notifications();
    let n = notifications.mark_as_read(11).await.unwrap();
    assert!(n.is_read);
    assert_eq!(server.last_request().body.unwrap(), json!({ "isRead": true }));

    assert_eq!(notifications.mark_all_as_read(42).await.unwrap().count, 5);
    assert_eq!(server.last_request().body.unwrap(), json!({}));

    assert_eq!(notifications.get_unread_count(42).await.unwrap().count, 0);
}

#[tokio::test]
async fn readings_filters_and_latest() {
    let server = MockServer::start().await;
    let reading = json!({
        "_id": "665f1c2e9b1e8a0012345678", "unitId": "7", "sensorType": "temperature",
        "value": -18.5, "timestamp": "2025-04-01T09:00:00Z"
    });
    server.stub_ok(Method::GET, "/mongodb/readings", json!([reading.clone()]));
    server.stub_ok(Method::GET, "/mongodb/readings/unit/7", json!([reading.clone()]));
    server.stub_ok(Method::GET, "/mongodb/readings/unit/7/latest", reading);

    let readings = server.client().readings();

    readings.get_all(None, 100).await.unwrap();
    assert_eq!(server.last_request().query.as_deref(), Some("limit=100"));

    let by_unit = readings
        .get_by_unit_id("7", Some(SensorType::Temperature), 20)
        .await
        .unwrap();
    assert_eq!(by_unit.len(), 1);
    assert_eq!(
        server.last_request().query.as_deref(),
        Some("sensorType=temperature&limit=20")
    );

    let latest = readings.get_latest_by_unit_id("7").await.unwrap();
    assert_eq!(latest.id, "665f1c2e9b1e8a0012345678");
    assert_eq!(server.last_request().path, "/mongodb/readings/unit/7/latest");
}

#[tokio::test]
async fn iot_sensor_readings_with_date_range() {
    let server = MockServer::start().await;
    server.stub_ok(
        Method::GET,
        "/iot/readings/sensor/5",
        json!([{ "readingId": 1, "sensorId": 5, "value": 4.2, "recordedAt": "2025-01-01T01:00:00Z" }]),
    );
    server.stub_ok(
        Method::GET,
        "/iot/alerts/temperature",
        json!([{ "sensorId": 5, "value": -12.0, "threshold": -18.0 }]),
    );

    let iot = server.client().iot();
    let readings = iot
        .get_readings_by_sensor_id(5, Some("2025-01-01"), None)
        .await
        .unwrap();
    assert_eq!(readings[0].sensor_id, 5);
    assert_eq!(server.last_request().query.as_deref(), Some("startDate=2025-01-01"));

    let alerts = iot.check_temperature_alerts().await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert!((alerts[0].excess() - 6.0).abs() < f64::EPSILON);
}

// =========================================================================
// Dashboard
// =========================================================================

fn stub_dashboard_lists(server: &MockServer) {
    server.stub_ok(
        Method::GET,
        "/warehouses",
        json!([warehouse_json(1, "North"), warehouse_json(2, "South")]),
    );
    server.stub_ok(
        Method::GET,
        "/storage-units",
        json!([
            unit_json(1, 1, "occupied"),
            unit_json(2, 1, "available"),
            unit_json(3, 2, "occupied")
        ]),
    );
    server.stub_ok(
        Method::GET,
        "/bookings",
        json!([booking_json(1, 42, "pending"), booking_json(2, 43, "confirmed")]),
    );
    server.stub_ok(
        Method::GET,
        "/mongodb/readings",
        json!([
            reading_json("a1", "1", -18.5),
            reading_json("a2", "3", -17.0)
        ]),
    );
}

#[tokio::test]
async fn dashboard_snapshot_aggregates_all_lists() {
    let server = MockServer::start().await;
    stub_dashboard_lists(&server);

    let snapshot = Dashboard::new(&server.client()).snapshot().await.unwrap();

    assert_eq!(snapshot.stats.total_warehouses, 2);
    assert_eq!(snapshot.stats.total_units, 3);
    assert_eq!(snapshot.stats.occupied_units, 2);
    assert_eq!(snapshot.stats.pending_bookings, 1);
    assert_eq!(snapshot.stats.confirmed_bookings, 1);
    // 50% and 100%.
    assert!((snapshot.stats.fleet_occupancy - 75.0).abs() < 1e-9);
    assert_eq!(snapshot.summaries.len(), 2);
    assert_eq!(snapshot.summaries[0].total_units, 2);
    assert_eq!(snapshot.readings.len(), 2);

    let readings_request = server
        .requests()
        .into_iter()
        .find(|r| r.path == "/mongodb/readings")
        .unwrap();
    assert_eq!(
        readings_request.query.as_deref(),
        Some("sensorType=temperature&limit=100")
    );
}

#[tokio::test]
async fn dashboard_snapshot_fails_if_units_fail() {
    let server = MockServer::start().await;
    server.stub_ok(Method::GET, "/warehouses", json!([]));
    server.stub_ok(Method::GET, "/bookings", json!([]));
    server.stub_ok(Method::GET, "/mongodb/readings", json!([]));
    server.stub(Method::GET, "/storage-units", 500, &json!({ "message": "db down" }));

    let err = Dashboard::new(&server.client())
        .snapshot()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn dashboard_snapshot_fails_if_readings_fail() {
    let server = MockServer::start().await;
    server.stub_ok(Method::GET, "/warehouses", json!([]));
    server.stub_ok(Method::GET, "/storage-units", json!([]));
    server.stub_ok(Method::GET, "/bookings", json!([]));
    server.stub(Method::GET, "/mongodb/readings", 503, &json!({ "message": "mongo down" }));

    let err = Dashboard::new(&server.client())
        .snapshot()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn dashboard_accepts_decimals_sent_as_strings() {
    let server = MockServer::start().await;
    server.stub_ok(Method::GET, "/warehouses", json!([warehouse_json(1, "North")]));
    server.stub_ok(Method::GET, "/bookings", json!([]));
    server.stub_ok(Method::GET, "/mongodb/readings", json!([]));
    server.stub_ok(
        Method::GET,
        "/storage-units",
        json!([{
            "unitId": 1, "warehouseId": 1, "name": "Freezer A",
            "width": "2.00", "height": "2.50", "depth": "3.00",
            "costPerHour": "4.50", "minTemp": "-20.00", "maxTemp": "-10.00",
            "minHumidity": "40.00", "maxHumidity": null, "status": "occupied"
        }]),
    );

    let snapshot = Dashboard::new(&server.client()).snapshot().await.unwrap();

    let summary = &snapshot.summaries[0];
    assert!((summary.average_temperature + 15.0).abs() < 1e-9);
    assert!((summary.average_humidity - 20.0).abs() < 1e-9);
    assert!((summary.occupancy_rate - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn warehouse_details_joins_units() {
    let server = MockServer::start().await;
    server.stub_ok(Method::GET, "/warehouses/2", warehouse_json(2, "South"));
    server.stub_ok(
        Method::GET,
        "/storage-units/warehouse/2",
        json!([unit_json(3, 2, "occupied"), unit_json(4, 2, "reserved")]),
    );

    let details = Dashboard::new(&server.client())
        .warehouse_details(2)
        .await
        .unwrap();

    assert_eq!(details.warehouse.name, "South");
    assert_eq!(details.units.len(), 2);
    assert_eq!(details.summary.available_units, 0);
    assert!((details.summary.occupancy_rate - 100.0).abs() < 1e-9);
}
