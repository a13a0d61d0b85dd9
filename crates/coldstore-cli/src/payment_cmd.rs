//! `coldstore payments ...`

use std::io::Write;

use coldstore_client::ApiClient;

use crate::output::write_json;

#[derive(clap::Subcommand, Debug)]
pub enum PaymentAction {
    /// List all payments.
    List,
    /// Show a single payment.
    Get {
        /// Payment ID.
        id: i64,
    },
    /// Delete a payment record.
    Delete {
        /// Payment ID.
        id: i64,
    },
}

pub async fn run<W: Write>(
    client: &ApiClient,
    action: PaymentAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let payments = client.payments();
    match action {
        PaymentAction::List => write_json(out, &payments.get_all().await?)?,
        PaymentAction::Get { id } => write_json(out, &payments.get_by_id(id).await?)?,
        PaymentAction::Delete { id } => {
            payments.delete(id).await?;
            writeln!(out, "Deleted payment {id}.")?;
        }
    }
    Ok(())
}
