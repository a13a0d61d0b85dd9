//! Temperature- and humidity-controlled storage units inside a warehouse.

use serde::{Deserialize, Serialize};

use super::{Identified, require_non_empty, require_non_negative, require_ordered};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnit {
    pub unit_id: i64,
    pub warehouse_id: i64,
    pub name: String,
    #[serde(deserialize_with = "super::decimal", default)]
    pub width: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub height: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub depth: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub cost_per_hour: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub min_temp: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub max_temp: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub min_humidity: f64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub max_humidity: f64,
    pub status: UnitStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl StorageUnit {
    /// Midpoint of the configured temperature band.
    pub fn target_temperature(&self) -> f64 {
        (self.min_temp + self.max_temp) / 2.0
    }

    /// Midpoint of the configured humidity band.
    pub fn target_humidity(&self) -> f64 {
        (self.min_humidity + self.max_humidity) / 2.0
    }
}

impl Identified for StorageUnit {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.unit_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStorageUnit {
    pub warehouse_id: i64,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub cost_per_hour: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
    pub status: UnitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl NewStorageUnit {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_negative("width", self.width)?;
        require_non_negative("height", self.height)?;
        require_non_negative("depth", self.depth)?;
        require_non_negative("costPerHour", self.cost_per_hour)?;
        require_ordered("minTemp", self.min_temp, "maxTemp", self.max_temp)?;
        require_ordered(
            "minHumidity",
            self.min_humidity,
            "maxHumidity",
            self.max_humidity,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnitPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UnitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl StorageUnitPatch {
    /// Checks only what the patch itself carries. A bound is compared
    /// against its partner only when both are being changed.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("costPerHour", self.cost_per_hour),
        ] {
            if let Some(v) = value {
                require_non_negative(field, v)?;
            }
        }
        if let (Some(min), Some(max)) = (self.min_temp, self.max_temp) {
            require_ordered("minTemp", min, "maxTemp", max)?;
        }
        if let (Some(min), Some(max)) = (self.min_humidity, self.max_humidity) {
            require_ordered("minHumidity", min, "maxHumidity", max)?;
        }
        Ok(())
    }
}
