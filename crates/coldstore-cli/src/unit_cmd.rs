//! `coldstore units ...`

use std::io::Write;

use coldstore_client::ApiClient;
use coldstore_core::models::UnitStatus;

use crate::output::{parse_enum, write_json};

#[derive(clap::Subcommand, Debug)]
pub enum UnitAction {
    /// List storage units.
    List {
        /// Only units in this warehouse.
        #[arg(short, long)]
        warehouse: Option<i64>,
    },
    /// Show a single unit.
    Get {
        /// Unit ID.
        id: i64,
    },
    /// Change a unit's status: available, occupied, maintenance, reserved.
    Status {
        /// Unit ID.
        id: i64,
        #[arg(value_parser = parse_enum::<UnitStatus>)]
        status: UnitStatus,
    },
    /// Delete a unit.
    Delete {
        /// Unit ID.
        id: i64,
    },
}

pub async fn run<W: Write>(client: &ApiClient, action: UnitAction, out: &mut W) -> anyhow::Result<()> {
    let units = client.storage_units();
    match action {
        UnitAction::List { warehouse: None } => write_json(out, &units.get_all().await?)?,
        UnitAction::List {
            warehouse: Some(id),
        } => write_json(out, &units.get_by_warehouse_id(id).await?)?,
        UnitAction::Get { id } => write_json(out, &units.get_by_id(id).await?)?,
        UnitAction::Status { id, status } => {
            write_json(out, &units.update_status(id, status).await?)?;
        }
        UnitAction::Delete { id } => {
            units.delete(id).await?;
            writeln!(out, "Deleted unit {id}.")?;
        }
    }
    Ok(())
}
