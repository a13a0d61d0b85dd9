//! `/notifications` resource.

use coldstore_core::models::{Count, NewNotification, Notification, NotificationPatch};
use serde_json::json;
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const NOTIFICATION_ENDPOINT: &str = "/notifications";

#[derive(Debug, Clone)]
pub struct NotificationService {
    client: ApiClient,
}

impl NotificationService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Notification>, ClientError> {
        self.client
            .get_all(NOTIFICATION_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching notifications"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Notification, ClientError> {
        self.client
            .get_by_id(NOTIFICATION_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching notification by ID"))
    }

    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Notification>, ClientError> {
        self.client
            .get_all(&format!("{NOTIFICATION_ENDPOINT}/user/{user_id}"))
            .await
            .inspect_err(|e| error!(error = %e, user_id, "Error fetching notifications by user"))
    }

    pub async fn create(&self, data: &NewNotification) -> Result<Notification, ClientError> {
        data.validate()?;
        self.client
            .create(NOTIFICATION_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating notification"))
    }

    pub async fn update(
        &self,
        id: i64,
        data: &NotificationPatch,
    ) -> Result<Notification, ClientError> {
        self.client
            .update(NOTIFICATION_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating notification"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(NOTIFICATION_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting notification"))
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<Notification, ClientError> {
        let patch = NotificationPatch {
            is_read: Some(true),
            ..Default::default()
        };
        self.client
            .update(&format!("{NOTIFICATION_ENDPOINT}/read"), id, &patch)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error marking notification as read"))
    }

    /// Returns how many notifications were flipped to read.
    pub async fn mark_all_as_read(&self, user_id: i64) -> Result<Count, ClientError> {
        self.client
            .update(&format!("{NOTIFICATION_ENDPOINT}/read-all"), user_id, &json!({}))
            .await
            .inspect_err(|e| {
                error!(error = %e, user_id, "Error marking all notifications as read");
            })
    }

    pub async fn get_unread_count(&self, user_id: i64) -> Result<Count, ClientError> {
        self.client
            .get_all(&format!("{NOTIFICATION_ENDPOINT}/unread-count/{user_id}"))
            .await
            .inspect_err(|e| {
                error!(error = %e, user_id, "Error fetching unread notification count");
            })
    }
}
