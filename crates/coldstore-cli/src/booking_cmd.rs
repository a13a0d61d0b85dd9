//! `coldstore bookings ...`

use std::io::Write;

use coldstore_client::ApiClient;
use coldstore_core::models::BookingStatus;

use crate::output::{parse_enum, write_json};

#[derive(clap::Subcommand, Debug)]
pub enum BookingAction {
    /// List bookings, optionally for one customer or warehouse.
    List {
        /// Customer (user) ID.
        #[arg(long, conflicts_with = "warehouse")]
        customer: Option<i64>,
        /// Warehouse ID.
        #[arg(long)]
        warehouse: Option<i64>,
    },
    /// Show a single booking.
    Get {
        /// Booking ID.
        id: i64,
    },
    /// Units attached to a booking.
    Units {
        /// Booking ID.
        id: i64,
    },
    /// Change a booking's status: pending, confirmed, cancelled, completed.
    Status {
        /// Booking ID.
        id: i64,
        #[arg(value_parser = parse_enum::<BookingStatus>)]
        status: BookingStatus,
    },
    /// Delete a booking.
    Delete {
        /// Booking ID.
        id: i64,
    },
}

pub async fn run<W: Write>(
    client: &ApiClient,
    action: BookingAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let bookings = client.bookings();
    match action {
        BookingAction::List {
            customer: Some(id),
            ..
        } => write_json(out, &bookings.get_by_customer_id(id).await?)?,
        BookingAction::List {
            warehouse: Some(id),
            ..
        } => write_json(out, &bookings.get_by_warehouse_id(id).await?)?,
        BookingAction::List { .. } => write_json(out, &bookings.get_all().await?)?,
        BookingAction::Get { id } => write_json(out, &bookings.get_by_id(id).await?)?,
        BookingAction::Units { id } => write_json(out, &bookings.get_booking_units(id).await?)?,
        BookingAction::Status { id, status } => {
            write_json(out, &bookings.update_status(id, status).await?)?;
        }
        BookingAction::Delete { id } => {
            bookings.delete(id).await?;
            writeln!(out, "Deleted booking {id}.")?;
        }
    }
    Ok(())
}
