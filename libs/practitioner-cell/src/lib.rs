pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

use std::sync::Arc;

use services::directory::PractitionerDirectory;
use services::roster::PatientRoster;

/// Shared state for the practitioner HTTP surface.
pub struct PractitionerState {
    pub directory: PractitionerDirectory,
    pub roster: Arc<PatientRoster>,
}

pub use models::*;
pub use router::practitioner_routes;
