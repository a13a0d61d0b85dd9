//! In-process stand-in for the REST API.
//!
//! Every request is recorded. Responses come from stubs keyed on method and
//! path (relative to `/API`); a stub registered several times for the same
//! route is served in order, and the last one repeats. Anything unstubbed
//! gets a 404.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use coldstore_client::{ApiClient, ClientConfig};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    stubs: HashMap<(Method, String), VecDeque<(StatusCode, String)>>,
    requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<Inner>>;

pub struct MockServer {
    state: Shared,
    pub base_url: String,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = Shared::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            state,
            base_url: format!("http://{addr}/API"),
        }
    }

    /// Stub a raw response body.
    pub fn stub_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .lock()
            .unwrap()
            .stubs
            .entry((method, path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
    }

    pub fn stub(&self, method: Method, path: &str, status: u16, body: &Value) {
        self.stub_raw(method, path, status, &body.to_string());
    }

    /// Stub a `200 {success: true, data}` response.
    pub fn stub_ok(&self, method: Method, path: &str, data: Value) {
        self.stub(method, path, 200, &ok(data));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().unwrap()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::new(&self.base_url)).unwrap()
    }
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

async fn handle(State(state): State<Shared>, method: Method, uri: Uri, body: String) -> Response {
    let path = uri
        .path()
        .strip_prefix("/API")
        .unwrap_or(uri.path())
        .to_string();
    let mut inner = state.lock().unwrap();
    inner.requests.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        body: serde_json::from_str(&body).ok(),
    });

    let Some(queue) = inner.stubs.get_mut(&(method, path)) else {
        return (StatusCode::NOT_FOUND, r#"{"message":"no stub"}"#).into_response();
    };
    let (status, body) = if queue.len() > 1 {
        queue.pop_front().unwrap()
    } else {
        queue.front().cloned().unwrap()
    };
    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

// =========================================================================
// Fixtures
// =========================================================================

pub fn warehouse_json(id: i64, name: &str) -> Value {
    json!({
        "warehouseId": id,
        "ownerId": 1,
        "name": name,
        "address": "12 Harbour Rd",
        "status": "active",
        "location": { "type": "Point", "coordinates": [126.97, 37.56] },
        "operatingHours": { "monday": { "open": "08:00", "close": "18:00" } },
        "amenities": ["loading_dock"],
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "deletedAt": null
    })
}

pub fn unit_json(id: i64, warehouse_id: i64, status: &str) -> Value {
    json!({
        "unitId": id,
        "warehouseId": warehouse_id,
        "name": format!("U{id}"),
        "width": 2.0,
        "height": 2.5,
        "depth": 3.0,
        "costPerHour": 4.5,
        "minTemp": -20.0,
        "maxTemp": -10.0,
        "minHumidity": 40.0,
        "maxHumidity": 60.0,
        "status": status
    })
}

pub fn booking_json(id: i64, customer_id: i64, status: &str) -> Value {
    json!({
        "bookingId": id,
        "customerId": customer_id,
        "warehouseId": 1,
        "startDate": "2025-03-01T00:00:00Z",
        "endDate": "2025-03-08T00:00:00Z",
        "status": status,
        "units": [{ "unitId": 3, "pricePerHour": 4.5 }]
    })
}

pub fn reading_json(id: &str, unit_id: &str, value: f64) -> Value {
    json!({
        "_id": id,
        "unitId": unit_id,
        "sensorType": "temperature",
        "value": value,
        "timestamp": "2025-04-01T09:00:00Z"
    })
}
