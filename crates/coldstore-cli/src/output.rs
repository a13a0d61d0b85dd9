//! Output formatting helpers.

use std::io::{self, Write};

use coldstore_client::{DashboardSnapshot, WarehouseDetails};
use coldstore_core::stats::WarehouseSummary;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pretty-print any payload as JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Parse a wire-format enum value such as `in_progress` or `occupied`.
///
/// Used as a clap `value_parser` so the accepted spellings always match
/// what the API sends.
pub fn parse_enum<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(s.to_string()))
        .map_err(|_| format!("invalid value '{s}'"))
}

/// Truncate a string to fit a table column.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('~');
        t
    }
}

fn write_summary_header(w: &mut impl Write) -> io::Result<()> {
    writeln!(
        w,
        "{:<6} {:<24} {:>5} {:>5} {:>7} {:>9} {:>8}",
        "ID", "NAME", "UNITS", "FREE", "OCC%", "AVG TEMP", "AVG HUM"
    )
}

fn write_summary_row(w: &mut impl Write, s: &WarehouseSummary) -> io::Result<()> {
    writeln!(
        w,
        "{:<6} {:<24} {:>5} {:>5} {:>6.1}% {:>9.1} {:>8.1}",
        s.warehouse_id,
        truncate(&s.name, 24),
        s.total_units,
        s.available_units,
        s.occupancy_rate,
        s.average_temperature,
        s.average_humidity,
    )
}

pub fn write_dashboard(w: &mut impl Write, snapshot: &DashboardSnapshot) -> io::Result<()> {
    let stats = &snapshot.stats;
    writeln!(
        w,
        "Warehouses: {}   Units: {} ({} occupied)   Occupancy: {:.1}%",
        stats.total_warehouses, stats.total_units, stats.occupied_units, stats.fleet_occupancy
    )?;
    writeln!(
        w,
        "Bookings:   {} pending, {} confirmed",
        stats.pending_bookings, stats.confirmed_bookings
    )?;
    if snapshot.summaries.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    write_summary_header(w)?;
    for summary in &snapshot.summaries {
        write_summary_row(w, summary)?;
    }
    Ok(())
}

pub fn write_warehouse_details(w: &mut impl Write, details: &WarehouseDetails) -> io::Result<()> {
    let warehouse = &details.warehouse;
    writeln!(w, "  ID:       {}", warehouse.warehouse_id)?;
    writeln!(w, "  Name:     {}", warehouse.name)?;
    writeln!(w, "  Address:  {}", warehouse.address)?;
    writeln!(w, "  Status:   {:?}", warehouse.status)?;
    writeln!(
        w,
        "  Location: {:.5}, {:.5}",
        warehouse.location.latitude(),
        warehouse.location.longitude()
    )?;
    if !warehouse.amenities.is_empty() {
        writeln!(w, "  Amenity:  {}", warehouse.amenities.join(", "))?;
    }
    writeln!(w)?;
    write_summary_header(w)?;
    write_summary_row(w, &details.summary)?;

    if details.units.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    writeln!(
        w,
        "{:<6} {:<20} {:<12} {:>13} {:>8}",
        "UNIT", "NAME", "STATUS", "TEMP RANGE", "COST/H"
    )?;
    for unit in &details.units {
        writeln!(
            w,
            "{:<6} {:<20} {:<12} {:>13} {:>8.2}",
            unit.unit_id,
            truncate(&unit.name, 20),
            format!("{:?}", unit.status).to_lowercase(),
            format!("{:.1}..{:.1}", unit.min_temp, unit.max_temp),
            unit.cost_per_hour,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use coldstore_core::models::{MaintenanceStatus, UnitStatus};
    use coldstore_core::stats::DashboardStats;

    use super::*;

    #[test]
    fn parse_enum_uses_wire_names() {
        assert_eq!(parse_enum::<UnitStatus>("reserved"), Ok(UnitStatus::Reserved));
        assert_eq!(
            parse_enum::<MaintenanceStatus>("in_progress"),
            Ok(MaintenanceStatus::InProgress)
        );
        assert!(parse_enum::<UnitStatus>("Reserved").is_err());
    }

    #[test]
    fn truncate_marks_cut_strings() {
        assert_eq!(truncate("North", 10), "North");
        assert_eq!(truncate("Northern Harbour", 8), "Norther~");
    }

    #[test]
    fn write_json_is_pretty_with_trailing_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({ "count": 3 })).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"count\": 3\n}\n");
    }

    #[test]
    fn empty_dashboard_prints_only_totals() {
        let snapshot = DashboardSnapshot {
            warehouses: Vec::new(),
            units: Vec::new(),
            bookings: Vec::new(),
            readings: Vec::new(),
            summaries: Vec::new(),
            stats: DashboardStats::compute(&[], &[], &[]),
        };
        let mut buf = Vec::new();
        write_dashboard(&mut buf, &snapshot).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Occupancy: 0.0%"));
    }
}
