//! `coldstore notifications ...`

use std::io::Write;

use coldstore_client::ApiClient;

use crate::output::write_json;

#[derive(clap::Subcommand, Debug)]
pub enum NotificationAction {
    /// List notifications, optionally for one user.
    List {
        /// User ID.
        #[arg(short, long)]
        user: Option<i64>,
    },
    /// Mark one notification as read.
    Read {
        /// Notification ID.
        id: i64,
    },
    /// Mark every notification of a user as read.
    ReadAll {
        /// User ID.
        user_id: i64,
    },
    /// Number of unread notifications for a user.
    Unread {
        /// User ID.
        user_id: i64,
    },
}

pub async fn run<W: Write>(
    client: &ApiClient,
    action: NotificationAction,
    out: &mut W,
) -> anyhow::Result<()> {
    let notifications = client.notifications();
    match action {
        NotificationAction::List { user: None } => {
            write_json(out, &notifications.get_all().await?)?;
        }
        NotificationAction::List { user: Some(id) } => {
            write_json(out, &notifications.get_by_user_id(id).await?)?;
        }
        NotificationAction::Read { id } => {
            write_json(out, &notifications.mark_as_read(id).await?)?;
        }
        NotificationAction::ReadAll { user_id } => {
            let marked = notifications.mark_all_as_read(user_id).await?;
            writeln!(out, "Marked {} notification(s) as read.", marked.count)?;
        }
        NotificationAction::Unread { user_id } => {
            let unread = notifications.get_unread_count(user_id).await?;
            writeln!(out, "{}", unread.count)?;
        }
    }
    Ok(())
}
