//! Time-series sensor readings stored in the document database.

use serde::{Deserialize, Serialize};

use super::{Identified, require_non_empty};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Temperature,
    Humidity,
    Proximity1,
    Proximity2,
    Motion,
    Door,
}

impl SensorType {
    /// Query-string value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Proximity1 => "proximity1",
            Self::Proximity2 => "proximity2",
            Self::Motion => "motion",
            Self::Door => "door",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    #[serde(rename = "_id")]
    pub id: String,
    pub unit_id: String,
    pub sensor_type: SensorType,
    pub value: f64,
    pub timestamp: String,
}

impl Identified for Reading {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReading {
    pub unit_id: String,
    pub sensor_type: SensorType,
    pub value: f64,
    pub timestamp: String,
}

impl NewReading {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("unitId", &self.unit_id)?;
        require_non_empty("timestamp", &self.timestamp)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<SensorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
