pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

use services::directory::PatientDirectory;

/// Shared state for the patient HTTP surface.
pub struct PatientState {
    pub directory: PatientDirectory,
}

pub use models::*;
pub use router::patient_routes;
