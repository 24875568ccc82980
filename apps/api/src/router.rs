use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::services::booking::BookingService;
use appointment_cell::services::slots::SlotCatalog;
use appointment_cell::SchedulingState;
use patient_cell::router::patient_routes;
use patient_cell::services::directory::PatientDirectory;
use patient_cell::PatientState;
use practitioner_cell::router::practitioner_routes;
use practitioner_cell::services::directory::PractitionerDirectory;
use practitioner_cell::services::roster::PatientRoster;
use practitioner_cell::PractitionerState;
use treatment_cell::router::treatment_routes;
use treatment_cell::services::plans::TreatmentPlanBook;
use treatment_cell::services::registry::TreatmentRegistry;
use treatment_cell::TreatmentState;

/// Builds the application router and every owning service behind it.
///
/// All process-wide state is constructed here exactly once and handed to the
/// cells through their state types; nothing lives in module-level globals.
pub fn create_router() -> Router {
    let registry = Arc::new(TreatmentRegistry::with_demo_catalog());
    let roster = Arc::new(PatientRoster::new());

    let scheduling = Arc::new(SchedulingState {
        booking: BookingService::with_demo_appointments(registry.clone(), roster.clone()),
        slots: SlotCatalog::new(),
    });
    let treatments = Arc::new(TreatmentState {
        registry: registry.clone(),
        plans: TreatmentPlanBook::with_demo_plans(),
    });
    let practitioners = Arc::new(PractitionerState {
        directory: PractitionerDirectory::from_profiles(registry.all_profiles()),
        roster,
    });
    let patients = Arc::new(PatientState {
        directory: PatientDirectory::with_demo_patients(),
    });

    Router::new()
        .route("/", get(|| async { "AyurSutra API is running!" }))
        .nest("/appointments", appointment_routes(scheduling))
        .nest("/treatments", treatment_routes(treatments))
        .nest("/practitioners", practitioner_routes(practitioners))
        .nest("/patients", patient_routes(patients))
}
