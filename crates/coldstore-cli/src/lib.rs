//! Coldstore CLI Library
//!
//! Command-line front end over the Coldstore REST client. Each resource
//! group lives in its own `*_cmd` module; `output` holds the shared
//! formatting helpers.

pub mod booking_cmd;
pub mod cli;
pub mod dashboard_cmd;
pub mod maintenance_cmd;
pub mod notification_cmd;
pub mod output;
pub mod payment_cmd;
pub mod telemetry_cmd;
pub mod unit_cmd;
pub mod user_cmd;
pub mod warehouse_cmd;
