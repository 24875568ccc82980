use tracing::debug;

use crate::models::{Practitioner, PractitionerProfile};

/// Read-only directory of every registered practitioner.
///
/// Built once at startup from the treatment pools; duplicates are collapsed
/// by id in first-seen order.
pub struct PractitionerDirectory {
    entries: Vec<Practitioner>,
}

impl PractitionerDirectory {
    pub fn from_profiles<'a>(profiles: impl IntoIterator<Item = &'a PractitionerProfile>) -> Self {
        let mut entries: Vec<Practitioner> = Vec::new();
        for profile in profiles {
            if entries.iter().any(|existing| existing.id == profile.id) {
                continue;
            }
            entries.push(profile.summary());
        }
        debug!("Practitioner directory built with {} entries", entries.len());
        Self { entries }
    }

    pub fn all(&self) -> &[Practitioner] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Practitioner> {
        self.entries.iter().find(|practitioner| practitioner.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str) -> PractitionerProfile {
        PractitionerProfile {
            id: id.to_string(),
            name: name.to_string(),
            specialty: "Ayurvedic Physician".to_string(),
            experience_years: 10,
            rating: 4.8,
            contact: "+91 98000 11111".to_string(),
        }
    }

    #[test]
    fn collapses_duplicate_ids_in_first_seen_order() {
        let profiles = vec![
            profile("D101", "Dr. Ananya Iyer"),
            profile("D102", "Dr. Rohan Deshmukh"),
            profile("D101", "Dr. Ananya Iyer"),
        ];
        let directory = PractitionerDirectory::from_profiles(&profiles);

        assert_eq!(directory.all().len(), 2);
        assert_eq!(directory.all()[0].id, "D101");
        assert_eq!(directory.all()[1].id, "D102");
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        let directory = PractitionerDirectory::from_profiles(&[profile("D101", "Dr. Ananya Iyer")]);
        assert!(directory.get("D999").is_none());
    }
}
