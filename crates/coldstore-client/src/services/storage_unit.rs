//! `/storage-units` resource.

use coldstore_core::models::{NewStorageUnit, StorageUnit, StorageUnitPatch, UnitStatus};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const STORAGE_UNIT_ENDPOINT: &str = "/storage-units";

#[derive(Debug, Clone)]
pub struct StorageUnitService {
    client: ApiClient,
}

impl StorageUnitService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<StorageUnit>, ClientError> {
        self.client
            .get_all(STORAGE_UNIT_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching storage units"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<StorageUnit, ClientError> {
        self.client
            .get_by_id(STORAGE_UNIT_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching storage unit by ID"))
    }

    pub async fn get_by_warehouse_id(
        &self,
        warehouse_id: i64,
    ) -> Result<Vec<StorageUnit>, ClientError> {
        self.client
            .get_all(&format!("{STORAGE_UNIT_ENDPOINT}/warehouse/{warehouse_id}"))
            .await
            .inspect_err(|e| {
                error!(error = %e, warehouse_id, "Error fetching storage units by warehouse");
            })
    }

    pub async fn create(&self, data: &NewStorageUnit) -> Result<StorageUnit, ClientError> {
        data.validate()?;
        self.client
            .create(STORAGE_UNIT_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating storage unit"))
    }

    pub async fn update(
        &self,
        id: i64,
        data: &StorageUnitPatch,
    ) -> Result<StorageUnit, ClientError> {
        data.validate()?;
        self.client
            .update(STORAGE_UNIT_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating storage unit"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(STORAGE_UNIT_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting storage unit"))
    }

    /// Status-only update: PUT `{status}` to the unit itself.
    pub async fn update_status(
        &self,
        id: i64,
        status: UnitStatus,
    ) -> Result<StorageUnit, ClientError> {
        let patch = StorageUnitPatch {
            status: Some(status),
            ..Default::default()
        };
        self.client
            .update(STORAGE_UNIT_ENDPOINT, id, &patch)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating storage unit status"))
    }
}
