//! Bookings and the booking-to-unit join rows.

use serde::{Deserialize, Serialize};

use super::{Identified, require_non_empty, require_non_negative};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A unit as referenced from inside a booking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUnitLine {
    pub unit_id: i64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub price_per_hour: f64,
}

/// Join row returned by `/bookings/{id}/units`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUnit {
    pub booking_id: i64,
    pub unit_id: i64,
    #[serde(deserialize_with = "super::decimal", default)]
    pub price_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: i64,
    pub customer_id: i64,
    pub warehouse_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub units: Vec<BookingUnitLine>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Identified for Booking {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.booking_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub customer_id: i64,
    pub warehouse_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub units: Vec<BookingUnitLine>,
}

impl NewBooking {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("startDate", &self.start_date)?;
        require_non_empty("endDate", &self.end_date)?;
        if self.units.is_empty() {
            return Err(Error::Validation(
                "a booking needs at least one unit".into(),
            ));
        }
        for line in &self.units {
            require_non_negative("pricePerHour", line.price_per_hour)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Vec<BookingUnitLine>>,
}
