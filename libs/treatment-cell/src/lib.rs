pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

use std::sync::Arc;

use services::plans::TreatmentPlanBook;
use services::registry::TreatmentRegistry;

/// Shared state for the treatment HTTP surface.
pub struct TreatmentState {
    pub registry: Arc<TreatmentRegistry>,
    pub plans: TreatmentPlanBook,
}

pub use models::*;
pub use router::treatment_routes;
