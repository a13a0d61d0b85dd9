//! `/maintenance` resource.

use coldstore_core::models::{
    Maintenance, MaintenancePatch, MaintenanceSchedule, MaintenanceStatus, NewMaintenance,
};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const MAINTENANCE_ENDPOINT: &str = "/maintenance";

#[derive(Debug, Clone)]
pub struct MaintenanceService {
    client: ApiClient,
}

impl MaintenanceService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Maintenance>, ClientError> {
        self.client
            .get_all(MAINTENANCE_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching maintenance records"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Maintenance, ClientError> {
        self.client
            .get_by_id(MAINTENANCE_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching maintenance record by ID"))
    }

    pub async fn get_by_unit_id(&self, unit_id: i64) -> Result<Vec<Maintenance>, ClientError> {
        self.client
            .get_all(&format!("{MAINTENANCE_ENDPOINT}/unit/{unit_id}"))
            .await
            .inspect_err(|e| {
                error!(error = %e, unit_id, "Error fetching maintenance records by unit");
            })
    }

    pub async fn create(&self, data: &NewMaintenance) -> Result<Maintenance, ClientError> {
        data.validate()?;
        self.client
            .create(MAINTENANCE_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating maintenance record"))
    }

    pub async fn update(
        &self,
        id: i64,
        data: &MaintenancePatch,
    ) -> Result<Maintenance, ClientError> {
        self.client
            .update(MAINTENANCE_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating maintenance record"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(MAINTENANCE_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting maintenance record"))
    }

    /// Status changes go through the dedicated `/maintenance/status/{id}` route.
    pub async fn update_status(
        &self,
        id: i64,
        status: MaintenanceStatus,
    ) -> Result<Maintenance, ClientError> {
        let patch = MaintenancePatch {
            status: Some(status),
            ..Default::default()
        };
        self.client
            .update(&format!("{MAINTENANCE_ENDPOINT}/status"), id, &patch)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating maintenance status"))
    }

    pub async fn schedule(&self, data: &MaintenanceSchedule) -> Result<Maintenance, ClientError> {
        data.validate()?;
        self.client
            .create(&format!("{MAINTENANCE_ENDPOINT}/schedule"), data)
            .await
            .inspect_err(|e| error!(error = %e, "Error scheduling maintenance"))
    }
}
