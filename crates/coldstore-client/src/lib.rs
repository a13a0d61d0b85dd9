//! Coldstore REST client.
//!
//! Two layers over the cold-storage back-office API:
//! - [`ApiClient`]: generic JSON primitives (`create`, `get_all`, `get_by_id`,
//!   `update`, `remove`) that unwrap the `{success, data}` envelope
//! - [`services`]: one service per resource with fixed endpoint paths
//!
//! [`Dashboard`] fans out over several services and aggregates the results.

pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod http;
pub mod retry;
pub mod services;

pub use dashboard::{Dashboard, DashboardSnapshot, WarehouseDetails};
pub use envelope::Envelope;
pub use error::ClientError;
pub use http::{ApiClient, ClientConfig};
pub use retry::RetryPolicy;
