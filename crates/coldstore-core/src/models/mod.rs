//! Entity models mirrored from the cold-storage REST API.
//!
//! Wire names are camelCase. Every entity has three shapes: the record the
//! server returns, a `New*` payload for creation (server assigns the id and
//! timestamps), and a `*Patch` payload for updates that only serializes the
//! fields that are set.

pub mod booking;
pub mod iot;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod reading;
pub mod storage_unit;
pub mod user;
pub mod warehouse;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

pub use booking::{Booking, BookingPatch, BookingStatus, BookingUnit, BookingUnitLine, NewBooking};
pub use iot::{
    IotReading, IotSensor, IotSensorPatch, IotSensorStatus, IotSensorType, NewIotReading,
    NewIotSensor, SensorAlert,
};
pub use maintenance::{
    Maintenance, MaintenancePatch, MaintenancePriority, MaintenanceSchedule, MaintenanceStatus,
    MaintenanceType, NewMaintenance,
};
pub use notification::{NewNotification, Notification, NotificationPatch, NotificationType};
pub use payment::{NewPayment, Payment, PaymentMethod, PaymentPatch, PaymentStatus};
pub use reading::{NewReading, Reading, ReadingPatch, SensorType};
pub use storage_unit::{NewStorageUnit, StorageUnit, StorageUnitPatch, UnitStatus};
pub use user::{NewUser, User, UserPatch, UserRole, UserStatus};
pub use warehouse::{
    GeoPoint, NearbyWarehouse, NewWarehouse, OperatingHours, Warehouse, WarehousePatch,
    WarehouseStatus,
};

/// Counter payload returned by the notification read/unread endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub count: u64,
}

/// Entities carrying a server-assigned identifier.
pub trait Identified {
    type Id: PartialEq + ?Sized;

    fn id(&self) -> &Self::Id;
}

/// Replace the entry with the same id as `item`. Returns `false` (and leaves
/// the list untouched) when no entry matches.
pub fn replace_by_id<T: Identified>(list: &mut [T], item: T) -> bool {
    match list.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Remove and return the entry with the given id.
pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: &T::Id) -> Option<T> {
    let pos = list.iter().position(|existing| existing.id() == id)?;
    Some(list.remove(pos))
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(Error::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// `min` must be strictly below `max`.
pub(crate) fn require_ordered(min_field: &str, min: f64, max_field: &str, max: f64) -> Result<()> {
    if min >= max {
        return Err(Error::Validation(format!(
            "{min_field} ({min}) must be less than {max_field} ({max})"
        )));
    }
    Ok(())
}

/// Decimal columns come back as JSON numbers or as strings such as
/// `"-20.00"`. `null` and a missing field read as 0.
pub(crate) fn decimal<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid decimal: {s:?}"))),
    }
}
