//! `/bookings` resource.

use coldstore_core::models::{Booking, BookingPatch, BookingStatus, BookingUnit, NewBooking};
use tracing::error;

use crate::error::ClientError;
use crate::http::ApiClient;

const BOOKING_ENDPOINT: &str = "/bookings";

#[derive(Debug, Clone)]
pub struct BookingService {
    client: ApiClient,
}

impl BookingService {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, ClientError> {
        self.client
            .get_all(BOOKING_ENDPOINT)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching bookings"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Booking, ClientError> {
        self.client
            .get_by_id(BOOKING_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error fetching booking by ID"))
    }

    pub async fn get_by_customer_id(&self, customer_id: i64) -> Result<Vec<Booking>, ClientError> {
        self.client
            .get_all(&format!("{BOOKING_ENDPOINT}/customer/{customer_id}"))
            .await
            .inspect_err(|e| error!(error = %e, customer_id, "Error fetching bookings by customer"))
    }

    pub async fn get_by_warehouse_id(
        &self,
        warehouse_id: i64,
    ) -> Result<Vec<Booking>, ClientError> {
        self.client
            .get_all(&format!("{BOOKING_ENDPOINT}/warehouse/{warehouse_id}"))
            .await
            .inspect_err(|e| {
                error!(error = %e, warehouse_id, "Error fetching bookings by warehouse");
            })
    }

    pub async fn create(&self, data: &NewBooking) -> Result<Booking, ClientError> {
        data.validate()?;
        self.client
            .create(BOOKING_ENDPOINT, data)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating booking"))
    }

    pub async fn update(&self, id: i64, data: &BookingPatch) -> Result<Booking, ClientError> {
        self.client
            .update(BOOKING_ENDPOINT, id, data)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating booking"))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client
            .remove(BOOKING_ENDPOINT, id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error deleting booking"))
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<Booking, ClientError> {
        let patch = BookingPatch {
            status: Some(status),
            ..Default::default()
        };
        self.client
            .update(BOOKING_ENDPOINT, id, &patch)
            .await
            .inspect_err(|e| error!(error = %e, id, "Error updating booking status"))
    }

    /// Join rows linking the booking to its units.
    pub async fn get_booking_units(&self, booking_id: i64) -> Result<Vec<BookingUnit>, ClientError> {
        self.client
            .get_all(&format!("{BOOKING_ENDPOINT}/{booking_id}/units"))
            .await
            .inspect_err(|e| error!(error = %e, booking_id, "Error fetching booking units"))
    }
}
