use crate::models::Patient;

/// Read-only directory of demo patients.
pub struct PatientDirectory {
    patients: Vec<Patient>,
}

impl PatientDirectory {
    pub fn with_demo_patients() -> Self {
        let patients = vec![
            Patient {
                id: "P001".to_string(),
                name: "Rajesh Kumar".to_string(),
                age: 45,
                gender: "Male".to_string(),
                phone: "+91 98765 43210".to_string(),
                email: "rajesh.kumar@email.com".to_string(),
                constitution: "Vata-Pitta".to_string(),
                current_condition: "Chronic joint pain, insomnia".to_string(),
            },
            Patient {
                id: "P002".to_string(),
                name: "Priya Sharma".to_string(),
                age: 32,
                gender: "Female".to_string(),
                phone: "+91 87654 32109".to_string(),
                email: "priya.sharma@email.com".to_string(),
                constitution: "Pitta-Kapha".to_string(),
                current_condition: "Digestive issues, stress".to_string(),
            },
        ];
        Self { patients }
    }

    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.id == id)
    }
}
