//! One service per API resource.
//!
//! Each method calls a single [`ApiClient`] primitive with a fixed endpoint
//! path and returns the unwrapped payload. Failures are logged with an
//! operation-specific message and returned unchanged.

pub mod booking;
pub mod iot;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod reading;
pub mod storage_unit;
pub mod user;
pub mod warehouse;

pub use booking::BookingService;
pub use iot::IotService;
pub use maintenance::MaintenanceService;
pub use notification::NotificationService;
pub use payment::PaymentService;
pub use reading::ReadingService;
pub use storage_unit::StorageUnitService;
pub use user::UserService;
pub use warehouse::WarehouseService;

use crate::http::ApiClient;

impl ApiClient {
    pub fn warehouses(&self) -> WarehouseService {
        WarehouseService::new(self.clone())
    }

    pub fn storage_units(&self) -> StorageUnitService {
        StorageUnitService::new(self.clone())
    }

    pub fn bookings(&self) -> BookingService {
        BookingService::new(self.clone())
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.clone())
    }

    pub fn maintenance(&self) -> MaintenanceService {
        MaintenanceService::new(self.clone())
    }

    pub fn notifications(&self) -> NotificationService {
        NotificationService::new(self.clone())
    }

    pub fn readings(&self) -> ReadingService {
        ReadingService::new(self.clone())
    }

    pub fn iot(&self) -> IotService {
        IotService::new(self.clone())
    }
}
