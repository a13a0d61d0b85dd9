//! Top-level argument parsing and dispatch.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use coldstore_client::ApiClient;
use coldstore_core::Config;

use crate::booking_cmd::{self, BookingAction};
use crate::dashboard_cmd;
use crate::maintenance_cmd::{self, MaintenanceAction};
use crate::notification_cmd::{self, NotificationAction};
use crate::payment_cmd::{self, PaymentAction};
use crate::telemetry_cmd::{self, ReadingAction, SensorAction};
use crate::unit_cmd::{self, UnitAction};
use crate::user_cmd::{self, UserAction};
use crate::warehouse_cmd::{self, WarehouseAction};

#[derive(Parser, Debug)]
#[command(name = "coldstore")]
#[command(version, about = "Cold-storage warehouse management CLI", long_about = None)]
pub struct Cli {
    /// API root URL.
    #[arg(long, global = true, env = "COLDSTORE_API_URL")]
    pub api_url: Option<String>,

    /// Settings file layered over the global one.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON log lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Warehouse operations.
    Warehouses {
        #[command(subcommand)]
        action: WarehouseAction,
    },
    /// Storage unit operations.
    Units {
        #[command(subcommand)]
        action: UnitAction,
    },
    /// Booking operations.
    Bookings {
        #[command(subcommand)]
        action: BookingAction,
    },
    /// Payment operations.
    Payments {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// User operations.
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Maintenance records.
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceAction,
    },
    /// User notifications.
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },
    /// Time-series sensor readings.
    Readings {
        #[command(subcommand)]
        action: ReadingAction,
    },
    /// Registered IoT sensors and alerts.
    Sensors {
        #[command(subcommand)]
        action: SensorAction,
    },
    /// Fleet overview, or a single warehouse with `--warehouse`.
    Dashboard {
        /// Warehouse ID.
        #[arg(short, long)]
        warehouse: Option<i64>,
    },
}

impl Cli {
    /// Command-line flags sit on top of every other configuration source.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url.clone_from(url);
        }
        if self.log_json {
            config.log.json = true;
        }
    }
}

/// Env-filter directive applying `level` to every coldstore crate.
pub fn log_filter(level: &str) -> String {
    ["coldstore_cli", "coldstore_client", "coldstore_core"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Execute a parsed command, writing user-facing output to `out`.
pub async fn run<W: Write>(client: &ApiClient, command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Warehouses { action } => warehouse_cmd::run(client, action, out).await,
        Command::Units { action } => unit_cmd::run(client, action, out).await,
        Command::Bookings { action } => booking_cmd::run(client, action, out).await,
        Command::Payments { action } => payment_cmd::run(client, action, out).await,
        Command::Users { action } => user_cmd::run(client, action, out).await,
        Command::Maintenance { action } => maintenance_cmd::run(client, action, out).await,
        Command::Notifications { action } => notification_cmd::run(client, action, out).await,
        Command::Readings { action } => telemetry_cmd::run_readings(client, action, out).await,
        Command::Sensors { action } => telemetry_cmd::run_sensors(client, action, out).await,
        Command::Dashboard { warehouse } => dashboard_cmd::run(client, warehouse, out).await,
    }
}
