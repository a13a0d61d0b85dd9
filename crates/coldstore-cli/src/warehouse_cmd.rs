//! `coldstore warehouses ...`
//!
//! User-facing output uses writeln! to the supplied writer.

use std::io::Write;

use coldstore_client::ApiClient;

use crate::output::{truncate, write_json};

#[derive(clap::Subcommand, Debug)]
pub enum WarehouseAction {
    /// List all warehouses.
    List,
    /// Show a single warehouse.
    Get {
        /// Warehouse ID.
        id: i64,
    },
    /// Delete a warehouse.
    Delete {
        /// Warehouse ID.
        id: i64,
    },
    /// Warehouses around a point, nearest first.
    Nearby {
        /// Latitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Search radius in kilometres.
        #[arg(long)]
        max_km: Option<f64>,
    },
    /// Storage units inside a warehouse.
    Units {
        /// Warehouse ID.
        id: i64,
    },
}

pub async fn run<W: Write>(
    client: &ApiClient,
    action: WarehouseAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let warehouses = client.warehouses();
    match action {
        WarehouseAction::List => write_json(out, &warehouses.get_all().await?)?,
        WarehouseAction::Get { id } => write_json(out, &warehouses.get_by_id(id).await?)?,
        WarehouseAction::Delete { id } => {
            warehouses.delete(id).await?;
            writeln!(out, "Deleted warehouse {id}.")?;
        }
        WarehouseAction::Nearby { lat, lon, max_km } => {
            let found = warehouses.nearby(lat, lon, max_km).await?;
            if found.is_empty() {
                writeln!(out, "No warehouses found nearby.")?;
            } else {
                writeln!(
                    out,
                    "{:<6} {:<28} {:>9} {:>6} {:>8}",
                    "ID", "NAME", "DIST(km)", "FREE", "COST/H"
                )?;
                for w in &found {
                    let cost = w
                        .cost_per_hour
                        .map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
                    writeln!(
                        out,
                        "{:<6} {:<28} {:>9.2} {:>6} {:>8}",
                        w.id,
                        truncate(&w.name, 28),
                        w.distance,
                        format!("{}/{}", w.available_units, w.total_units),
                        cost,
                    )?;
                }
                writeln!(out, "\n{} warehouse(s)", found.len())?;
            }
        }
        WarehouseAction::Units { id } => {
            write_json(out, &client.storage_units().get_by_warehouse_id(id).await?)?;
        }
    }
    Ok(())
}
