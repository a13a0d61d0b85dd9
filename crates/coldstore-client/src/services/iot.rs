//! `/iot` resource: registered sensors, their readings, and threshold alerts.

use coldstore_core::models::{
    IotReading, IotSensor, IotSensorPatch, NewIotReading, NewIotSensor, SensorAlert,
};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const SENSORS_ENDPOINT: &str = "/iot/sensors";
const READINGS_ENDPOINT: &str = "/iot/readings";
const ALERTS_ENDPOINT: &str = "/iot/alerts";

#[derive(Debug, Clone)]
pub struct IotService {
    client: ApiClient,
}

impl IotService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // =========================================================================
    // Sensors
    // =========================================================================

    pub async fn get_all_sensors(&self) -> Result<Vec<IotSensor>, ClientError> {
        self.client
            .get_all(SENSORS_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching sensors"))
    }

    pub async fn get_sensor_by_id(&self, id: i64) -> Result<IotSensor, ClientError> {
        self.client
            .get_by_id(SENSORS_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching sensor by ID"))
    }

    pub async fn get_sensors_by_unit_id(&self, unit_id: i64) -> Result<Vec<IotSensor>, ClientError> {
        self.client
            .get_all(&format!("{SENSORS_ENDPOINT}/unit/{unit_id}"))
            .await
            .inspect_err(|e| error!(error = %e, unit_id, "Error fetching sensors by unit"))
    }

    pub async fn create_sensor(&self, data: &NewIotSensor) -> Result<IotSensor, ClientError> {
        self.client
            .create(SENSORS_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating sensor"))
    }

    pub async fn update_sensor(
        &self,
        id: i64,
        data: &IotSensorPatch,
    ) -> Result<IotSensor, ClientError> {
        self.client
            .update(SENSORS_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating sensor"))
    }

    pub async fn delete_sensor(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(SENSORS_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting sensor"))
    }

    // =========================================================================
    // Readings
    // =========================================================================

    /// Readings for one sensor, optionally bounded by ISO-8601 dates.
    pub async fn get_readings_by_sensor_id(
        &self,
        sensor_id: i64,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<IotReading>, ClientError> {
        let mut query = Vec::new();
        if let Some(start) = start_date {
            query.push(("startDate", start.to_string()));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end.to_string()));
        }
        self.client
            .get_with_query(&format!("{READINGS_ENDPOINT}/sensor/{sensor_id}"), &query)
            .await
            .inspect_err(|e| error!(error = %e, sensor_id, "Error fetching readings"))
    }

    pub async fn get_latest_readings_by_unit_id(
        &self,
        unit_id: i64,
    ) -> Result<Vec<IotReading>, ClientError> {
        self.client
            .get_all(&format!("{READINGS_ENDPOINT}/unit/{unit_id}/latest"))
            .await
            .inspect_err(|e| error!(error = %e, unit_id, "Error fetching latest readings"))
    }

    pub async fn create_reading(&self, data: &NewIotReading) -> Result<IotReading, ClientError> {
        self.client
            .create(READINGS_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating reading"))
    }

    // =========================================================================
    // Alerts
    // =========================================================================

    pub async fn check_temperature_alerts(&self) -> Result<Vec<SensorAlert>, ClientError> {
        self.client
            .get_all(&format!("{ALERTS_ENDPOINT}/temperature"))
            .await
            .inspect_err(|e| error!(error = %e, "Error checking temperature alerts"))
    }

    pub async fn check_humidity_alerts(&self) -> Result<Vec<SensorAlert>, ClientError> {
        self.client
            .get_all(&format!("{ALERTS_ENDPOINT}/humidity"))
            .await
            .inspect_err(|e| error!(error = %e, "Error checking humidity alerts"))
    }
}
