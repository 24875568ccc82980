// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use practitioner_cell::models::Practitioner;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Strictly monotonic, derived from the creation instant in epoch
    /// milliseconds.
    pub id: i64,
    pub patient_id: String,
    pub patient_name: String,
    pub date: NaiveDate,
    /// Free-form time-of-day label ("10:00 AM", "09:00"); no duration or
    /// timezone arithmetic is performed on it.
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub treatment_type: String,
    /// Owned copy of the assigned practitioner; `None` when the treatment
    /// pool was empty and no requested practitioner matched.
    pub doctor: Option<Practitioner>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Single place the transition rules live. Every transition is allowed
    /// today, including reopening completed or cancelled appointments.
    pub fn can_transition_to(self, _next: AppointmentStatus) -> bool {
        true
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(AppointmentError::InvalidStatus(other.to_string())),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booking payload. Required fields are modelled as `Option` so that absence
/// surfaces as a domain validation error instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub treatment_type: Option<String>,
    pub doctor_id: Option<String>,
}

/// Listing filter. Absent fields do not filter; the date bounds are
/// inclusive at both ends and compared as calendar dates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFilter {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    /// Raw status text: a value outside the allowed set simply matches
    /// nothing, it is not an error.
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    pub practitioner_id: Option<String>,
    pub date: Option<String>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Missing required fields: patientId, patientName, date, time, type, treatmentType")]
    MissingFields,

    #[error("Invalid status. Allowed: scheduled, completed, cancelled")]
    InvalidStatus(String),

    #[error("Appointment not found")]
    NotFound,
}
