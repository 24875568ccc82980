// libs/practitioner-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::AppError;

use crate::PractitionerState;

#[axum::debug_handler]
pub async fn list_practitioners(
    State(state): State<Arc<PractitionerState>>,
) -> Json<Value> {
    Json(json!({
        "success": true,
        "practitioners": state.directory.all()
    }))
}

#[axum::debug_handler]
pub async fn get_practitioner(
    State(state): State<Arc<PractitionerState>>,
    Path(practitioner_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let practitioner = state
        .directory
        .get(&practitioner_id)
        .ok_or_else(|| AppError::NotFound("Practitioner not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "practitioner": practitioner
    })))
}

/// Patients ever assigned to this practitioner. Unknown ids resolve to an
/// empty list rather than a 404.
#[axum::debug_handler]
pub async fn get_practitioner_patients(
    State(state): State<Arc<PractitionerState>>,
    Path(practitioner_id): Path<String>,
) -> Json<Value> {
    let patients = state.roster.patients_for(&practitioner_id);

    Json(json!({
        "success": true,
        "practitionerId": practitioner_id,
        "patients": patients
    }))
}
