//! Dashboard aggregation over already-fetched lists.
//!
//! Everything here is a pure reduction. Empty inputs yield zero rather than
//! NaN so callers can render the numbers directly.

use serde::Serialize;

use crate::models::{Booking, BookingStatus, StorageUnit, UnitStatus, Warehouse};

/// Percentage (0-100) of units that are not `available`.
pub fn occupancy_rate(units: &[StorageUnit]) -> f64 {
    if units.is_empty() {
        return 0.0;
    }
    let available = units
        .iter()
        .filter(|u| u.status == UnitStatus::Available)
        .count();
    (units.len() - available) as f64 / units.len() as f64 * 100.0
}

/// Number of units currently rented out.
pub fn occupied_units(units: &[StorageUnit]) -> usize {
    units
        .iter()
        .filter(|u| u.status == UnitStatus::Occupied)
        .count()
}

/// Mean of each unit's temperature-band midpoint.
pub fn average_temperature(units: &[StorageUnit]) -> f64 {
    mean(units.iter().map(StorageUnit::target_temperature), units.len())
}

/// Mean of each unit's humidity-band midpoint.
pub fn average_humidity(units: &[StorageUnit]) -> f64 {
    mean(units.iter().map(StorageUnit::target_humidity), units.len())
}

fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}

/// Header figures for one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseSummary {
    pub warehouse_id: i64,
    pub name: String,
    pub total_units: usize,
    pub available_units: usize,
    pub occupancy_rate: f64,
    pub average_temperature: f64,
    pub average_humidity: f64,
}

impl WarehouseSummary {
    /// Summarise `warehouse` using only the units that belong to it.
    pub fn from_units(warehouse: &Warehouse, all_units: &[StorageUnit]) -> Self {
        let units: Vec<StorageUnit> = all_units
            .iter()
            .filter(|u| u.warehouse_id == warehouse.warehouse_id)
            .cloned()
            .collect();
        Self {
            warehouse_id: warehouse.warehouse_id,
            name: warehouse.name.clone(),
            total_units: units.len(),
            available_units: units
                .iter()
                .filter(|u| u.status == UnitStatus::Available)
                .count(),
            occupancy_rate: occupancy_rate(&units),
            average_temperature: average_temperature(&units),
            average_humidity: average_humidity(&units),
        }
    }
}

/// Mean of the per-warehouse occupancy rates. A warehouse with no units
/// counts as 0% occupied.
pub fn fleet_occupancy(warehouses: &[Warehouse], units: &[StorageUnit]) -> f64 {
    mean(
        warehouses
            .iter()
            .map(|w| WarehouseSummary::from_units(w, units).occupancy_rate),
        warehouses.len(),
    )
}

/// Top-of-dashboard figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_warehouses: usize,
    pub total_units: usize,
    pub occupied_units: usize,
    pub fleet_occupancy: f64,
    pub pending_bookings: usize,
    pub confirmed_bookings: usize,
}

impl DashboardStats {
    pub fn compute(warehouses: &[Warehouse], units: &[StorageUnit], bookings: &[Booking]) -> Self {
        let count_status =
            |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total_warehouses: warehouses.len(),
            total_units: units.len(),
            occupied_units: occupied_units(units),
            fleet_occupancy: fleet_occupancy(warehouses, units),
            pending_bookings: count_status(BookingStatus::Pending),
            confirmed_bookings: count_status(BookingStatus::Confirmed),
        }
    }
}
