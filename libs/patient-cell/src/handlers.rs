use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::AppError;

use crate::PatientState;

#[axum::debug_handler]
pub async fn list_patients(State(state): State<Arc<PatientState>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "patients": state.directory.all()
    }))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<PatientState>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let patient = state
        .directory
        .get(&patient_id)
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "patient": patient
    })))
}
