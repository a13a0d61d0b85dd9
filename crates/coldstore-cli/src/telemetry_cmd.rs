//! `coldstore readings ...` and `coldstore sensors ...`

use std::io::Write;

use coldstore_client::ApiClient;
use coldstore_client::services::reading::DEFAULT_READING_LIMIT;
use coldstore_core::models::SensorType;
use serde_json::json;

use crate::output::{parse_enum, write_json};

#[derive(clap::Subcommand, Debug)]
pub enum ReadingAction {
    /// Recent readings, newest first.
    List {
        /// Only readings for this unit.
        #[arg(short, long)]
        unit: Option<String>,
        /// temperature, humidity, proximity1, proximity2, motion, door.
        #[arg(long, value_parser = parse_enum::<SensorType>)]
        sensor_type: Option<SensorType>,
        /// Maximum results.
        #[arg(short, long, default_value_t = DEFAULT_READING_LIMIT)]
        limit: u32,
    },
    /// Most recent reading for a unit.
    Latest {
        /// Unit ID.
        unit: String,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum SensorAction {
    /// List registered sensors.
    List {
        /// Only sensors attached to this unit.
        #[arg(short, long)]
        unit: Option<i64>,
    },
    /// Readings recorded by one sensor.
    Readings {
        /// Sensor ID.
        sensor: i64,
        /// ISO-8601 start of the range.
        #[arg(long)]
        from: Option<String>,
        /// ISO-8601 end of the range.
        #[arg(long)]
        to: Option<String>,
    },
    /// Sensors currently past their temperature or humidity thresholds.
    Alerts,
}

pub async fn run_readings<W: Write>(
    client: &ApiClient,
    action: ReadingAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let readings = client.readings();
    match action {
        ReadingAction::List {
            unit: Some(unit),
            sensor_type,
            limit,
        } => write_json(
            out,
            &readings.get_by_unit_id(&unit, sensor_type, limit).await?,
        )?,
        ReadingAction::List {
            unit: None,
            sensor_type,
            limit,
        } => write_json(out, &readings.get_all(sensor_type, limit).await?)?,
        ReadingAction::Latest { unit } => {
            write_json(out, &readings.get_latest_by_unit_id(&unit).await?)?;
        }
    }
    Ok(())
}

pub async fn run_sensors<W: Write>(
    client: &ApiClient,
    action: SensorAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let iot = client.iot();
    match action {
        SensorAction::List { unit: None } => write_json(out, &iot.get_all_sensors().await?)?,
        SensorAction::List { unit: Some(id) } => {
            write_json(out, &iot.get_sensors_by_unit_id(id).await?)?;
        }
        SensorAction::Readings { sensor, from, to } => {
            let readings = iot
                .get_readings_by_sensor_id(sensor, from.as_deref(), to.as_deref())
                .await?;
            write_json(out, &readings)?;
        }
        SensorAction::Alerts => {
            let (temperature, humidity) = tokio::try_join!(
                iot.check_temperature_alerts(),
                iot.check_humidity_alerts()
            )?;
            write_json(
                out,
                &json!({ "temperature": temperature, "humidity": humidity }),
            )?;
        }
    }
    Ok(())
}
