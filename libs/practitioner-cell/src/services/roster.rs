use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::models::{PatientRef, Practitioner};

/// Per-practitioner roster of every patient ever assigned to them.
///
/// Populated only as a side effect of booking an appointment with a resolved
/// practitioner. Entries are de-duplicated by patient id; the first write for
/// an id wins, later name variations are ignored.
pub struct PatientRoster {
    entries: RwLock<HashMap<String, Vec<PatientRef>>>,
}

impl PatientRoster {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn record(&self, doctor: &Practitioner, patient: PatientRef) {
        if doctor.id.is_empty() {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let patients = entries.entry(doctor.id.clone()).or_default();
        if patients.iter().any(|existing| existing.id == patient.id) {
            return;
        }
        debug!("Recording patient {} on roster of {}", patient.id, doctor.id);
        patients.push(patient);
    }

    /// Returns an empty list for unknown practitioner ids, never an error.
    pub fn patients_for(&self, doctor_id: &str) -> Vec<PatientRef> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(doctor_id).cloned().unwrap_or_default()
    }

    /// Administrative reset of the entire roster.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }
}

impl Default for PatientRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Practitioner {
        Practitioner {
            id: "D101".to_string(),
            name: "Dr. Ananya Iyer".to_string(),
            specialty: "Panchakarma Specialist".to_string(),
        }
    }

    fn patient(id: &str, name: &str) -> PatientRef {
        PatientRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn duplicate_patient_ids_are_recorded_once() {
        let roster = PatientRoster::new();
        roster.record(&doctor(), patient("P001", "Rajesh Kumar"));
        roster.record(&doctor(), patient("P001", "Rajesh Kumar"));

        assert_eq!(roster.patients_for("D101").len(), 1);
    }

    #[test]
    fn first_write_wins_on_name_changes() {
        let roster = PatientRoster::new();
        roster.record(&doctor(), patient("P001", "Rajesh Kumar"));
        roster.record(&doctor(), patient("P001", "R. Kumar"));

        let patients = roster.patients_for("D101");
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].name, "Rajesh Kumar");
    }

    #[test]
    fn unknown_practitioner_yields_empty_list() {
        let roster = PatientRoster::new();
        assert!(roster.patients_for("D999").is_empty());
    }

    #[test]
    fn blank_practitioner_id_is_ignored() {
        let roster = PatientRoster::new();
        let nameless = Practitioner {
            id: String::new(),
            name: "Dr. Nobody".to_string(),
            specialty: "None".to_string(),
        };
        roster.record(&nameless, patient("P001", "Rajesh Kumar"));
        assert!(roster.patients_for("").is_empty());
    }

    #[test]
    fn clear_resets_every_roster() {
        let roster = PatientRoster::new();
        roster.record(&doctor(), patient("P001", "Rajesh Kumar"));
        roster.clear();
        assert!(roster.patients_for("D101").is_empty());
    }
}
