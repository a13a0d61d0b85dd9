//! `coldstore users ...`

use std::io::Write;

use coldstore_client::ApiClient;

use crate::output::write_json;

#[derive(clap::Subcommand, Debug)]
pub enum UserAction {
    /// List all users.
    List,
    /// Show a single user.
    Get {
        /// User ID.
        id: i64,
    },
    /// Delete a user.
    Delete {
        /// User ID.
        id: i64,
    },
}

pub async fn run<W: Write>(client: &ApiClient, action: UserAction, out: &mut W) -> anyhow::Result<()> {
    let users = client.users();
    match action {
        UserAction::List => write_json(out, &users.get_all().await?)?,
        UserAction::Get { id } => write_json(out, &users.get_by_id(id).await?)?,
        UserAction::Delete { id } => {
            users.delete(id).await?;
            writeln!(out, "Deleted user {id}.")?;
        }
    }
    Ok(())
}
