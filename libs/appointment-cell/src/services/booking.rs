use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use practitioner_cell::models::{PatientRef, Practitioner};
use practitioner_cell::services::roster::PatientRoster;
use treatment_cell::services::registry::TreatmentRegistry;

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentStatus, BookAppointmentRequest,
};
use crate::services::assignment::AssignmentService;

struct StoreInner {
    appointments: Vec<Appointment>,
    last_id: i64,
}

/// Single source of truth for appointment records within the process
/// lifetime.
///
/// All mutation goes through the store's write lock; booking performs the
/// roster update while still holding it, so appointment creation and the
/// practitioner-patient roster stay consistent under concurrent callers.
/// Records are append-only and never physically deleted; only their status
/// changes after creation.
pub struct BookingService {
    assignment: AssignmentService,
    roster: Arc<PatientRoster>,
    inner: RwLock<StoreInner>,
}

impl BookingService {
    pub fn new(registry: Arc<TreatmentRegistry>, roster: Arc<PatientRoster>) -> Self {
        Self {
            assignment: AssignmentService::new(registry),
            roster,
            inner: RwLock::new(StoreInner {
                appointments: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// A store pre-seeded with the demo fixtures. The seeds do not touch the
    /// practitioner roster; only booked appointments do.
    pub fn with_demo_appointments(
        registry: Arc<TreatmentRegistry>,
        roster: Arc<PatientRoster>,
    ) -> Self {
        let service = Self::new(registry, roster);
        {
            let mut inner = service
                .inner
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            inner.appointments = demo_appointments();
            inner.last_id = inner
                .appointments
                .iter()
                .map(|appointment| appointment.id)
                .max()
                .unwrap_or(0);
        }
        service
    }

    pub fn book(&self, request: BookAppointmentRequest) -> Result<Appointment, AppointmentError> {
        let (patient_id, patient_name, date, time, appointment_type, treatment_type) =
            validate_booking(&request)?;

        let doctor = self
            .assignment
            .resolve(&treatment_type, request.doctor_id.as_deref());

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let created_at = Utc::now();
        let id = next_id(&mut inner, created_at);

        let appointment = Appointment {
            id,
            patient_id: patient_id.clone(),
            patient_name: patient_name.clone(),
            date,
            time,
            appointment_type,
            treatment_type,
            doctor,
            status: AppointmentStatus::Scheduled,
            created_at,
        };

        if let Some(doctor) = &appointment.doctor {
            self.roster.record(
                doctor,
                PatientRef {
                    id: patient_id,
                    name: patient_name,
                },
            );
        }

        info!(
            "Booked appointment {} for patient {} ({})",
            appointment.id, appointment.patient_id, appointment.treatment_type
        );
        inner.appointments.push(appointment.clone());
        Ok(appointment)
    }

    pub fn list(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .appointments
            .iter()
            .filter(|appointment| matches_filter(appointment, filter))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: i64) -> Result<Appointment, AppointmentError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .appointments
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
            .ok_or(AppointmentError::NotFound)
    }

    /// Applies a status change. The status text is validated before the
    /// record lookup, and the stored record is left untouched on any failure.
    pub fn update_status(&self, id: i64, status: &str) -> Result<Appointment, AppointmentError> {
        let next: AppointmentStatus = status.parse()?;

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let appointment = inner
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound)?;

        if !appointment.status.can_transition_to(next) {
            return Err(AppointmentError::InvalidStatus(status.to_string()));
        }

        debug!("Appointment {} status {} -> {}", id, appointment.status, next);
        appointment.status = next;
        Ok(appointment.clone())
    }

    pub fn for_doctor(&self, doctor_id: &str) -> Vec<Appointment> {
        self.list(&AppointmentFilter {
            doctor_id: Some(doctor_id.to_string()),
            ..AppointmentFilter::default()
        })
    }

    pub fn for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.list(&AppointmentFilter {
            patient_id: Some(patient_id.to_string()),
            ..AppointmentFilter::default()
        })
    }
}

/// Next appointment id: the creation instant in epoch milliseconds, bumped
/// past the previous id when two bookings land in the same millisecond.
fn next_id(inner: &mut StoreInner, created_at: DateTime<Utc>) -> i64 {
    let id = created_at.timestamp_millis().max(inner.last_id + 1);
    inner.last_id = id;
    id
}

fn present(value: &Option<String>) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}

type ValidatedBooking = (String, String, NaiveDate, String, String, String);

fn validate_booking(request: &BookAppointmentRequest) -> Result<ValidatedBooking, AppointmentError> {
    match (
        present(&request.patient_id),
        present(&request.patient_name),
        request.date,
        present(&request.time),
        present(&request.appointment_type),
        present(&request.treatment_type),
    ) {
        (
            Some(patient_id),
            Some(patient_name),
            Some(date),
            Some(time),
            Some(appointment_type),
            Some(treatment_type),
        ) => Ok((patient_id, patient_name, date, time, appointment_type, treatment_type)),
        _ => Err(AppointmentError::MissingFields),
    }
}

fn matches_filter(appointment: &Appointment, filter: &AppointmentFilter) -> bool {
    if let Some(patient_id) = &filter.patient_id {
        if &appointment.patient_id != patient_id {
            return false;
        }
    }
    if let Some(doctor_id) = &filter.doctor_id {
        match &appointment.doctor {
            Some(doctor) if &doctor.id == doctor_id => {}
            _ => return false,
        }
    }
    if let Some(status) = &filter.status {
        if appointment.status.to_string() != *status {
            return false;
        }
    }
    if let Some(from) = filter.from {
        if appointment.date < from {
            return false;
        }
    }
    if let Some(to) = filter.to {
        if appointment.date > to {
            return false;
        }
    }
    true
}

fn demo_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            patient_id: "P001".to_string(),
            patient_name: "Rajesh Kumar".to_string(),
            date: demo_date("2024-01-20"),
            time: "10:00 AM".to_string(),
            appointment_type: "Panchakarma Consultation".to_string(),
            treatment_type: "Panchakarma".to_string(),
            doctor: Some(Practitioner {
                id: "D101".to_string(),
                name: "Dr. Ananya Iyer".to_string(),
                specialty: "Panchakarma Specialist".to_string(),
            }),
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        },
        Appointment {
            id: 2,
            patient_id: "P002".to_string(),
            patient_name: "Priya Sharma".to_string(),
            date: demo_date("2024-01-20"),
            time: "2:00 PM".to_string(),
            appointment_type: "Follow-up".to_string(),
            treatment_type: "Abhyanga".to_string(),
            doctor: Some(Practitioner {
                id: "D201".to_string(),
                name: "Dr. Kavya Nair".to_string(),
                specialty: "Therapeutic Massage".to_string(),
            }),
            status: AppointmentStatus::Completed,
            created_at: Utc::now(),
        },
    ]
}

fn demo_date(value: &str) -> NaiveDate {
    value.parse().expect("valid demo appointment date")
}
