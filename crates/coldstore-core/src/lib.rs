//! Coldstore Core Library
//!
//! Shared functionality for Coldstore components:
//! - Entity models mirrored from the cold-storage REST API
//! - Dashboard aggregation over fetched storage units
//! - Configuration resolution and hierarchy
//! - Common error types

pub mod config;
pub mod error;
pub mod models;
pub mod stats;
pub mod tracing_init;

pub use config::Config;
pub use error::{Error, Result};
