use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers, PractitionerState};

pub fn practitioner_routes(state: Arc<PractitionerState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_practitioners))
        .route("/{practitioner_id}", get(handlers::get_practitioner))
        .route("/{practitioner_id}/patients", get(handlers::get_practitioner_patients))
        .with_state(state)
}
