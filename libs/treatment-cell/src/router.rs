use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers, TreatmentState};

pub fn treatment_routes(state: Arc<TreatmentState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_treatments))
        .route("/doctors", get(handlers::get_treatment_doctor_map))
        .route("/type/{treatment_type}/doctors", get(handlers::get_doctors_for_type))
        .route("/{treatment_id}", get(handlers::get_treatment))
        .with_state(state)
}
