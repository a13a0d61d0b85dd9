//! Maintenance records for warehouses and individual units.

use serde::{Deserialize, Serialize};

use super::{Identified, require_non_empty, require_non_negative};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub maintenance_id: i64,
    pub warehouse_id: i64,
    #[serde(default)]
    pub unit_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub status: MaintenanceStatus,
    pub priority: MaintenancePriority,
    pub description: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub downtime_hours: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Maintenance {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.maintenance_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenance {
    pub warehouse_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub status: MaintenanceStatus,
    pub priority: MaintenancePriority,
    pub description: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downtime_hours: Option<f64>,
}

impl NewMaintenance {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("description", &self.description)?;
        require_non_empty("startDate", &self.start_date)?;
        if let Some(hours) = self.downtime_hours {
            require_non_negative("downtimeHours", hours)?;
        }
        Ok(())
    }
}

/// Body for `POST /maintenance/schedule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    pub unit_id: i64,
    pub scheduled_date: String,
    pub description: String,
    pub priority: MaintenancePriority,
}

impl MaintenanceSchedule {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("scheduledDate", &self.scheduled_date)?;
        require_non_empty("description", &self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MaintenanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<MaintenancePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downtime_hours: Option<f64>,
}
