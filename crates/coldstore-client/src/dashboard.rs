//! Concurrent fan-out over several services for the overview screens.

use coldstore_core::models::{Booking, Reading, StorageUnit, Warehouse};
use coldstore_core::stats::{DashboardStats, WarehouseSummary};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::services::reading::DEFAULT_READING_LIMIT;
use crate::services::{BookingService, ReadingService, StorageUnitService, WarehouseService};

/// Everything the overview page shows, fetched in one go.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub warehouses: Vec<Warehouse>,
    pub units: Vec<StorageUnit>,
    pub bookings: Vec<Booking>,
    /// Latest temperature readings across all units.
    pub readings: Vec<Reading>,
    pub summaries: Vec<WarehouseSummary>,
    pub stats: DashboardStats,
}

/// One warehouse together with its units.
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseDetails {
    pub warehouse: Warehouse,
    pub units: Vec<StorageUnit>,
    pub summary: WarehouseSummary,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    warehouses: WarehouseService,
    units: StorageUnitService,
    bookings: BookingService,
    readings: ReadingService,
}

impl Dashboard {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            warehouses: client.warehouses(),
            units: client.storage_units(),
            bookings: client.bookings(),
            readings: client.readings(),
        }
    }

    /// Fetch warehouses, units, bookings and recent readings concurrently.
    /// The first failure wins and the rest are dropped.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, ClientError> {
        let (warehouses, units, bookings, readings) = tokio::try_join!(
            self.warehouses.get_all(),
            self.units.get_all(),
            self.bookings.get_all(),
            self.readings.get_latest_readings(None, DEFAULT_READING_LIMIT),
        )?;
        debug!(
            warehouses = warehouses.len(),
            units = units.len(),
            bookings = bookings.len(),
            readings = readings.len(),
            "dashboard data fetched"
        );

        let summaries = warehouses
            .iter()
            .map(|w| WarehouseSummary::from_units(w, &units))
            .collect();
        let stats = DashboardStats::compute(&warehouses, &units, &bookings);
        info!(
            warehouses = stats.total_warehouses,
            units = stats.total_units,
            occupancy = stats.fleet_occupancy,
            "dashboard snapshot ready"
        );

        Ok(DashboardSnapshot {
            warehouses,
            units,
            bookings,
            readings,
            summaries,
            stats,
        })
    }

    pub async fn warehouse_details(&self, id: i64) -> Result<WarehouseDetails, ClientError> {
        let (warehouse, units) = tokio::try_join!(
            self.warehouses.get_by_id(id),
            self.units.get_by_warehouse_id(id),
        )?;
        let summary = WarehouseSummary::from_units(&warehouse, &units);
        Ok(WarehouseDetails {
            warehouse,
            units,
            summary,
        })
    }
}
