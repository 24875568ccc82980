// libs/treatment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Map, Value};

use shared_models::AppError;

use crate::models::TreatmentPlan;
use crate::TreatmentState;

fn enrich_with_doctors(state: &TreatmentState, plan: &TreatmentPlan) -> Result<Value, AppError> {
    let mut value = serde_json::to_value(plan).map_err(|e| AppError::Internal(e.to_string()))?;
    value["doctors"] = json!(state.registry.pool_for(&plan.treatment_type));
    Ok(value)
}

/// Treatment plans, each enriched with its treatment type's doctor pool.
#[axum::debug_handler]
pub async fn list_treatments(
    State(state): State<Arc<TreatmentState>>,
) -> Result<Json<Value>, AppError> {
    let treatments = state
        .plans
        .all()
        .iter()
        .map(|plan| enrich_with_doctors(&state, plan))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(json!({
        "success": true,
        "treatments": treatments
    })))
}

/// The full treatment type to doctor pool mapping.
#[axum::debug_handler]
pub async fn get_treatment_doctor_map(
    State(state): State<Arc<TreatmentState>>,
) -> Json<Value> {
    let mut data = Map::new();
    for (treatment_type, pool) in state.registry.catalog() {
        data.insert(treatment_type.to_string(), json!(pool));
    }

    Json(json!({
        "success": true,
        "data": data
    }))
}

#[axum::debug_handler]
pub async fn get_doctors_for_type(
    State(state): State<Arc<TreatmentState>>,
    Path(treatment_type): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctors = state.registry.pool_for(&treatment_type);
    if doctors.is_empty() {
        return Err(AppError::NotFound(
            "No doctors found for this treatment type".to_string(),
        ));
    }

    Ok(Json(json!({
        "success": true,
        "type": treatment_type,
        "doctors": doctors
    })))
}

#[axum::debug_handler]
pub async fn get_treatment(
    State(state): State<Arc<TreatmentState>>,
    Path(treatment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let plan = state
        .plans
        .get(treatment_id)
        .ok_or_else(|| AppError::NotFound("Treatment not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "treatment": enrich_with_doctors(&state, plan)?
    })))
}
