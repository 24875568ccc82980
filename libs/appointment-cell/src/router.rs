use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, SchedulingState};

pub fn appointment_routes(state: Arc<SchedulingState>) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment).get(handlers::search_appointments))
        .route("/available-slots", get(handlers::get_available_slots))
        .route("/doctor/{doctor_id}", get(handlers::get_doctor_appointments))
        .route("/patient/{patient_id}", get(handlers::get_patient_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/status", put(handlers::update_appointment_status))
        .with_state(state)
}
