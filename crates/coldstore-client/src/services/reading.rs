//! `/mongodb/readings` resource: raw time-series readings per unit.

use coldstore_core::models::{NewReading, Reading, ReadingPatch, SensorType};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const READING_ENDPOINT: &str = "/mongodb/readings";

/// Page size the dashboard asks for when the caller doesn't say.
pub const DEFAULT_READING_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct ReadingService {
    client: ApiClient,
}

fn filter_query(sensor_type: Option<SensorType>, limit: u32) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(2);
    if let Some(t) = sensor_type {
        query.push(("sensorType", t.as_str().to_string()));
    }
    query.push(("limit", limit.to_string()));
    query
}

impl ReadingService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Most recent readings across all units, optionally for one sensor type.
    pub async fn get_all(
        &self,
        sensor_type: Option<SensorType>,
        limit: u32,
    ) -> Result<Vec<Reading>, ClientError> {
        self.client
            .get_with_query(READING_ENDPOINT, &filter_query(sensor_type, limit))
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching readings"))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Reading, ClientError> {
        self.client
            .get_by_id(READING_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching reading by ID"))
    }

    pub async fn get_by_unit_id(
        &self,
        unit_id: &str,
        sensor_type: Option<SensorType>,
        limit: u32,
    ) -> Result<Vec<Reading>, ClientError> {
        self.client
            .get_with_query(
                &format!("{READING_ENDPOINT}/unit/{unit_id}"),
                &filter_query(sensor_type, limit),
            )
            .await
            .inspect_err(|e| error!(error = %e, unit_id, "Error fetching readings by unit"))
    }

    pub async fn get_latest_by_unit_id(&self, unit_id: &str) -> Result<Reading, ClientError> {
        self.client
            .get_all(&format!("{READING_ENDPOINT}/unit/{unit_id}/latest"))
            .await
            .inspect_err(|e| error!(error = %e, unit_id, "Error fetching latest reading for unit"))
    }

    /// Latest readings of one sensor type, temperature unless told otherwise.
    pub async fn get_latest_readings(
        &self,
        sensor_type: Option<SensorType>,
        limit: u32,
    ) -> Result<Vec<Reading>, ClientError> {
        let sensor_type = sensor_type.unwrap_or(SensorType::Temperature);
        self.client
            .get_with_query(READING_ENDPOINT, &filter_query(Some(sensor_type), limit))
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching latest readings"))
    }

    pub async fn create(&self, data: &NewReading) -> Result<Reading, ClientError> {
        data.validate()?;
        self.client
            .create(READING_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating reading"))
    }

    pub async fn update(&self, id: &str, data: &ReadingPatch) -> Result<Reading, ClientError> {
        self.client
            .update(READING_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating reading"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client
            .remove(READING_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting reading"))
    }
}
