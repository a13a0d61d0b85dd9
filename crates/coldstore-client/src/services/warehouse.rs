//! `/warehouses` resource.

use coldstore_core::models::{NearbyWarehouse, NewWarehouse, Warehouse, WarehousePatch};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const WAREHOUSE_ENDPOINT: &str = "/warehouses";

#[derive(Debug, Clone)]
pub struct WarehouseService {
    client: ApiClient,
}

impl WarehouseService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Warehouse>, ClientError> {
        self.client
            .get_all(WAREHOUSE_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching warehouses"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Warehouse, ClientError> {
        self.client
            .get_by_id(WAREHOUSE_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching warehouse by ID"))
    }

    pub async fn create(&self, data: &NewWarehouse) -> Result<Warehouse, ClientError> {
        data.validate()?;
        self.client
            .create(WAREHOUSE_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating warehouse"))
    }

    pub async fn update(&self, id: i64, data: &WarehousePatch) -> Result<Warehouse, ClientError> {
        data.validate()?;
        self.client
            .update(WAREHOUSE_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating warehouse"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(WAREHOUSE_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting warehouse"))
    }

    /// Warehouses within `max_distance_km` of a point, nearest first. The
    /// server applies its own radius when `max_distance_km` is `None`.
    pub async fn nearby(
        &self,
        latitude: f64,
        longitude: f64,
        max_distance_km: Option<f64>,
    ) -> Result<Vec<NearbyWarehouse>, ClientError> {
        let mut query = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        if let Some(km) = max_distance_km {
            query.push(("maxDistanceKm", km.to_string()));
        }
        self.client
            .get_with_query(&format!("{WAREHOUSE_ENDPOINT}/nearby"), &query)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching nearby warehouses"))
    }
}
