use chrono::NaiveDate;

use crate::models::{TreatmentPlan, TreatmentPlanStatus};

/// Read-only book of demo treatment plans.
pub struct TreatmentPlanBook {
    plans: Vec<TreatmentPlan>,
}

fn demo_date(value: &str) -> NaiveDate {
    value.parse().expect("valid demo plan date")
}

impl TreatmentPlanBook {
    pub fn with_demo_plans() -> Self {
        let plans = vec![
            TreatmentPlan {
                id: 1,
                patient_id: "P001".to_string(),
                treatment_type: "Panchakarma".to_string(),
                start_date: demo_date("2024-01-15"),
                end_date: demo_date("2024-02-15"),
                status: TreatmentPlanStatus::Active,
                sessions: 12,
                completed_sessions: 8,
            },
            TreatmentPlan {
                id: 2,
                patient_id: "P002".to_string(),
                treatment_type: "Abhyanga".to_string(),
                start_date: demo_date("2024-01-10"),
                end_date: demo_date("2024-01-25"),
                status: TreatmentPlanStatus::Completed,
                sessions: 10,
                completed_sessions: 10,
            },
        ];
        Self { plans }
    }

    pub fn all(&self) -> &[TreatmentPlan] {
        &self.plans
    }

    pub fn get(&self, id: i64) -> Option<&TreatmentPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }
}
