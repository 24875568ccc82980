use std::sync::Arc;

use tracing::{debug, warn};

use practitioner_cell::models::Practitioner;
use treatment_cell::services::registry::TreatmentRegistry;

/// Resolves which practitioner a new appointment is attached to.
///
/// The policy is deterministic: a requested practitioner wins if they are in
/// the treatment's pool, otherwise the first pool member is the default.
/// There is no load balancing across the pool. Unknown treatment types and
/// unmatched requested ids degrade silently to the next step instead of
/// raising.
pub struct AssignmentService {
    registry: Arc<TreatmentRegistry>,
}

impl AssignmentService {
    pub fn new(registry: Arc<TreatmentRegistry>) -> Self {
        Self { registry }
    }

    pub fn resolve(
        &self,
        treatment_type: &str,
        requested_doctor_id: Option<&str>,
    ) -> Option<Practitioner> {
        let pool = self.registry.pool_for(treatment_type);
        if pool.is_empty() {
            warn!("No practitioners registered for treatment type {}", treatment_type);
            return None;
        }

        if let Some(requested) = requested_doctor_id {
            if let Some(profile) = pool.iter().find(|profile| profile.id == requested) {
                debug!("Assigning requested practitioner {} for {}", requested, treatment_type);
                return Some(profile.summary());
            }
        }

        let default = &pool[0];
        debug!("Assigning default practitioner {} for {}", default.id, treatment_type);
        Some(default.summary())
    }
}
