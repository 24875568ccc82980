use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::json;

use appointment_cell::handlers;
use appointment_cell::models::{
    AppointmentFilter, BookAppointmentRequest, SlotQuery, UpdateStatusRequest,
};
use appointment_cell::services::booking::BookingService;
use appointment_cell::services::slots::SlotCatalog;
use appointment_cell::SchedulingState;
use practitioner_cell::services::roster::PatientRoster;
use shared_models::AppError;
use treatment_cell::services::registry::TreatmentRegistry;

fn test_state() -> Arc<SchedulingState> {
    let roster = Arc::new(PatientRoster::new());
    Arc::new(SchedulingState {
        booking: BookingService::with_demo_appointments(
            Arc::new(TreatmentRegistry::with_demo_catalog()),
            roster,
        ),
        slots: SlotCatalog::new(),
    })
}

fn booking_request() -> BookAppointmentRequest {
    serde_json::from_value(json!({
        "patientId": "P010",
        "patientName": "Asha Verma",
        "date": "2024-02-01",
        "time": "10:00",
        "type": "Consultation",
        "treatmentType": "Panchakarma"
    }))
    .unwrap()
}

#[tokio::test]
async fn booking_returns_the_created_appointment() {
    let state = test_state();

    let response = handlers::book_appointment(State(state), Json(booking_request()))
        .await
        .unwrap();

    assert_eq!(response.0["success"], true);
    assert_eq!(response.0["appointment"]["patientId"], "P010");
    assert_eq!(response.0["appointment"]["type"], "Consultation");
    assert_eq!(response.0["appointment"]["status"], "scheduled");
    assert_eq!(response.0["appointment"]["doctor"]["id"], "D101");
}

#[tokio::test]
async fn booking_with_missing_fields_is_a_validation_error() {
    let state = test_state();
    let mut request = booking_request();
    request.treatment_type = None;

    let result = handlers::book_appointment(State(state), Json(request)).await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn booking_with_unknown_treatment_succeeds_without_a_doctor() {
    let state = test_state();
    let mut request = booking_request();
    request.treatment_type = Some("Unknown".to_string());

    let response = handlers::book_appointment(State(state), Json(request))
        .await
        .unwrap();

    assert_eq!(response.0["success"], true);
    assert!(response.0["appointment"]["doctor"].is_null());
}

#[tokio::test]
async fn search_filters_by_status() {
    let state = test_state();

    let filter = AppointmentFilter {
        status: Some("completed".to_string()),
        ..AppointmentFilter::default()
    };
    let response = handlers::search_appointments(State(state), Query(filter)).await;
    let appointments = response.0["appointments"].as_array().unwrap().clone();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["patientId"], "P002");
}

#[tokio::test]
async fn available_slots_echo_the_query_and_return_the_catalog() {
    let state = test_state();

    let query = SlotQuery {
        practitioner_id: Some("D101".to_string()),
        date: Some("2024-01-20".to_string()),
    };
    let response = handlers::get_available_slots(State(state), Query(query)).await;

    assert_eq!(response.0["success"], true);
    assert_eq!(response.0["practitionerId"], "D101");
    assert_eq!(response.0["date"], "2024-01-20");
    assert_eq!(response.0["slots"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn available_slots_tolerate_an_empty_query() {
    let state = test_state();

    let query = SlotQuery {
        practitioner_id: None,
        date: None,
    };
    let response = handlers::get_available_slots(State(state), Query(query)).await;

    assert!(response.0["practitionerId"].is_null());
    assert_eq!(response.0["slots"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn doctor_listing_only_returns_that_doctors_appointments() {
    let state = test_state();

    let response =
        handlers::get_doctor_appointments(State(state), Path("D201".to_string())).await;
    let appointments = response.0["appointments"].as_array().unwrap().clone();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["doctor"]["id"], "D201");
}

#[tokio::test]
async fn patient_listing_only_returns_that_patients_appointments() {
    let state = test_state();

    let response =
        handlers::get_patient_appointments(State(state), Path("P001".to_string())).await;
    let appointments = response.0["appointments"].as_array().unwrap().clone();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["patientName"], "Rajesh Kumar");
}

#[tokio::test]
async fn get_unknown_appointment_is_not_found() {
    let state = test_state();

    let result = handlers::get_appointment(State(state), Path(999)).await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn status_update_round_trips_through_the_handler() {
    let state = test_state();

    let request = UpdateStatusRequest {
        status: Some("cancelled".to_string()),
    };
    let response = handlers::update_appointment_status(State(state), Path(1), Json(request))
        .await
        .unwrap();

    assert_eq!(response.0["appointment"]["status"], "cancelled");
}

#[tokio::test]
async fn status_update_without_a_status_is_a_bad_request() {
    let state = test_state();

    let request = UpdateStatusRequest { status: None };
    let result = handlers::update_appointment_status(State(state), Path(1), Json(request)).await;

    assert_matches!(result, Err(AppError::BadRequest(_)));
}

#[tokio::test]
async fn status_update_for_unknown_appointment_is_not_found() {
    let state = test_state();

    let request = UpdateStatusRequest {
        status: Some("completed".to_string()),
    };
    let result = handlers::update_appointment_status(State(state), Path(999), Json(request)).await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}
