// libs/treatment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A patient's course of treatment, tracked across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPlan {
    pub id: i64,
    pub patient_id: String,
    #[serde(rename = "type")]
    pub treatment_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TreatmentPlanStatus,
    pub sessions: u32,
    pub completed_sessions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentPlanStatus {
    Active,
    Completed,
}

impl fmt::Display for TreatmentPlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreatmentPlanStatus::Active => write!(f, "Active"),
            TreatmentPlanStatus::Completed => write!(f, "Completed"),
        }
    }
}
