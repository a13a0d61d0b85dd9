//! `coldstore dashboard [--warehouse <id>]`

use std::io::Write;

use coldstore_client::{ApiClient, Dashboard};

use crate::output::{write_dashboard, write_warehouse_details};

pub async fn run<W: Write>(
    client: &ApiClient,
    warehouse: Option<i64>,
    out: &mut W,
) -> anyhow::Result<()> {
    let dashboard = Dashboard::new(client);
    match warehouse {
        Some(id) => write_warehouse_details(out, &dashboard.warehouse_details(id).await?)?,
        None => write_dashboard(out, &dashboard.snapshot().await?)?,
    }
    Ok(())
}
