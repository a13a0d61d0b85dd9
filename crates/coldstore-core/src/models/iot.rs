//! IoT sensors attached to storage units, their readings, and threshold alerts.

use serde::{Deserialize, Serialize};

use super::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IotSensorType {
    Temperature,
    Humidity,
    Motion,
    Door,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IotSensorStatus {
    Active,
    Inactive,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IotSensor {
    pub sensor_id: i64,
    pub unit_id: i64,
    pub sensor_type: IotSensorType,
    pub status: IotSensorStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Identified for IotSensor {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.sensor_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIotSensor {
    pub unit_id: i64,
    pub sensor_type: IotSensorType,
    pub status: IotSensorStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IotSensorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<IotSensorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IotSensorStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IotReading {
    pub reading_id: i64,
    pub sensor_id: i64,
    pub value: f64,
    pub recorded_at: String,
}

impl Identified for IotReading {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.reading_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIotReading {
    pub sensor_id: i64,
    pub value: f64,
    pub recorded_at: String,
}

/// A sensor whose latest value crossed its configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorAlert {
    pub sensor_id: i64,
    pub value: f64,
    pub threshold: f64,
}

impl SensorAlert {
    /// How far past the threshold the value is.
    pub fn excess(&self) -> f64 {
        (self.value - self.threshold).abs()
    }
}
