//! `/payments` resource.

use coldstore_core::models::{NewPayment, Payment, PaymentPatch};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const PAYMENT_ENDPOINT: &str = "/payments";

#[derive(Debug, Clone)]
pub struct PaymentService {
    client: ApiClient,
}

impl PaymentService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, ClientError> {
        self.client
            .get_all(PAYMENT_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching payments"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Payment, ClientError> {
        self.client
            .get_by_id(PAYMENT_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching payment by ID"))
    }

    pub async fn create(&self, data: &NewPayment) -> Result<Payment, ClientError> {
        data.validate()?;
        self.client
            .create(PAYMENT_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating payment"))
    }

    pub async fn update(&self, id: i64, data: &PaymentPatch) -> Result<Payment, ClientError> {
        self.client
            .update(PAYMENT_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating payment"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(PAYMENT_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting payment"))
    }
}
