pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

use services::booking::BookingService;
use services::slots::SlotCatalog;

/// Shared state for the appointment HTTP surface.
pub struct SchedulingState {
    pub booking: BookingService,
    pub slots: SlotCatalog,
}

pub use models::*;
pub use router::appointment_routes;
