// libs/practitioner-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// The practitioner summary embedded in appointments and listings.
///
/// Appointments store an owned copy of this, never a live reference,
/// so a record keeps the practitioner data it was booked with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

/// Full directory entry for a practitioner, as registered in treatment pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerProfile {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience_years: u8,
    pub rating: f32,
    pub contact: String,
}

impl PractitionerProfile {
    /// Project the embeddable summary form.
    pub fn summary(&self) -> Practitioner {
        Practitioner {
            id: self.id.clone(),
            name: self.name.clone(),
            specialty: self.specialty.clone(),
        }
    }
}

/// A patient reference kept on a practitioner's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRef {
    pub id: String,
    pub name: String,
}
