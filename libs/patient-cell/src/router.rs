use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers, PatientState};

pub fn patient_routes(state: Arc<PatientState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_patients))
        .route("/{patient_id}", get(handlers::get_patient))
        .with_state(state)
}
