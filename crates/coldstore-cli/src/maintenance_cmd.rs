//! `coldstore maintenance ...`

use std::io::Write;

use coldstore_client::ApiClient;
use coldstore_core::models::MaintenanceStatus;

use crate::output::{parse_enum, write_json};

#[derive(clap::Subcommand, Debug)]
pub enum MaintenanceAction {
    /// List maintenance records.
    List {
        /// Only records for this unit.
        #[arg(short, long)]
        unit: Option<i64>,
    },
    /// Show a single record.
    Get {
        /// Maintenance ID.
        id: i64,
    },
    /// Change status: scheduled, in_progress, completed, cancelled.
    Status {
        /// Maintenance ID.
        id: i64,
        #[arg(value_parser = parse_enum::<MaintenanceStatus>)]
        status: MaintenanceStatus,
    },
    /// Delete a record.
    Delete {
        /// Maintenance ID.
        id: i64,
    },
}

pub async fn run<W: Write>(
    client: &ApiClient,
    action: MaintenanceAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let maintenance = client.maintenance();
    match action {
        MaintenanceAction::List { unit: None } => write_json(out, &maintenance.get_all().await?)?,
        MaintenanceAction::List { unit: Some(id) } => {
            write_json(out, &maintenance.get_by_unit_id(id).await?)?;
        }
        MaintenanceAction::Get { id } => write_json(out, &maintenance.get_by_id(id).await?)?,
        MaintenanceAction::Status { id, status } => {
            write_json(out, &maintenance.update_status(id, status).await?)?;
        }
        MaintenanceAction::Delete { id } => {
            maintenance.delete(id).await?;
            writeln!(out, "Deleted maintenance record {id}.")?;
        }
    }
    Ok(())
}
