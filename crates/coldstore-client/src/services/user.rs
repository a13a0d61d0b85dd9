//! `/users` resource.

use coldstore_core::models::{NewUser, User, UserPatch};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const USER_ENDPOINT: &str = "/users";

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, ClientError> {
        self.client
            .get_all(USER_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching users"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, ClientError> {
        self.client
            .get_by_id(USER_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching user by ID"))
    }

    pub async fn create(&self, data: &NewUser) -> Result<User, ClientError> {
        data.validate()?;
        self.client
            .create(USER_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating user"))
    }

    pub async fn update(&self, id: i64, data: &UserPatch) -> Result<User, ClientError> {
        data.validate()?;
        self.client
            .update(USER_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating user"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(USER_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting user"))
    }
}
