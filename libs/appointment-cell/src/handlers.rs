// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::AppError;

use crate::models::{
    AppointmentError, AppointmentFilter, BookAppointmentRequest, SlotQuery, UpdateStatusRequest,
};
use crate::SchedulingState;

fn to_app_error(error: AppointmentError) -> AppError {
    match error {
        AppointmentError::MissingFields => AppError::ValidationError(error.to_string()),
        AppointmentError::InvalidStatus(_) => AppError::BadRequest(error.to_string()),
        AppointmentError::NotFound => AppError::NotFound(error.to_string()),
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<SchedulingState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.booking.book(request).map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(state): State<Arc<SchedulingState>>,
    Query(filter): Query<AppointmentFilter>,
) -> Json<Value> {
    Json(json!({
        "success": true,
        "appointments": state.booking.list(&filter)
    }))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<SlotQuery>,
) -> Json<Value> {
    let slots = state
        .slots
        .slots_for(query.practitioner_id.as_deref(), query.date.as_deref());

    Json(json!({
        "success": true,
        "practitionerId": query.practitioner_id,
        "date": query.date,
        "slots": slots
    }))
}

#[axum::debug_handler]
pub async fn get_doctor_appointments(
    State(state): State<Arc<SchedulingState>>,
    Path(doctor_id): Path<String>,
) -> Json<Value> {
    Json(json!({
        "success": true,
        "appointments": state.booking.for_doctor(&doctor_id)
    }))
}

#[axum::debug_handler]
pub async fn get_patient_appointments(
    State(state): State<Arc<SchedulingState>>,
    Path(patient_id): Path<String>,
) -> Json<Value> {
    Json(json!({
        "success": true,
        "appointments": state.booking.for_patient(&patient_id)
    }))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<SchedulingState>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.booking.get(appointment_id).map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<SchedulingState>>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let status = request.status.as_deref().unwrap_or_default();
    let appointment = state
        .booking
        .update_status(appointment_id, status)
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}
