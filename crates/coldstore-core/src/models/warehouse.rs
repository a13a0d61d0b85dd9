//! Warehouses and nearby-search results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Identified, require_non_empty};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseStatus {
    Active,
    Maintenance,
    Closed,
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub const fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub const fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Opening window for one day, as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub warehouse_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub address: String,
    pub status: WarehouseStatus,
    pub location: GeoPoint,
    /// Keyed by lowercase day name (`"monday"`, ...).
    #[serde(default)]
    pub operating_hours: BTreeMap<String, OperatingHours>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Identified for Warehouse {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.warehouse_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWarehouse {
    pub owner_id: i64,
    pub name: String,
    pub address: String,
    pub status: WarehouseStatus,
    pub location: GeoPoint,
    pub operating_hours: BTreeMap<String, OperatingHours>,
    pub amenities: Vec<String>,
}

impl NewWarehouse {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehousePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WarehouseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<BTreeMap<String, OperatingHours>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

impl WarehousePatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(address) = &self.address {
            require_non_empty("address", address)?;
        }
        Ok(())
    }
}

/// Row returned by `/warehouses/nearby`, flattened with unit availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyWarehouse {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Kilometres from the query point.
    pub distance: f64,
    #[serde(default)]
    pub cost_per_hour: Option<f64>,
    pub available_units: u32,
    pub total_units: u32,
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
}
