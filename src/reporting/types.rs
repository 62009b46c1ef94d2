use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Claim, ClaimStatus, Encounter};

/// Encounter report row, annotated with the owning patient's name.
#[derive(Debug, Clone, Serialize)]
pub struct EncounterMonthRow {
    pub encounter_id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub diagnosis: String,
    pub treatment: String,
    pub visit_date: NaiveDate,
    pub attending_clinician: Option<String>,
    pub total_price: f64,
}

impl EncounterMonthRow {
    pub fn new(encounter: &Encounter, patient_name: &str) -> Self {
        Self {
            encounter_id: encounter.id,
            patient_id: encounter.patient_id,
            patient_name: patient_name.to_string(),
            diagnosis: encounter.diagnosis.clone(),
            treatment: encounter.treatment.clone(),
            visit_date: encounter.visit_date,
            attending_clinician: encounter.attending_clinician.clone(),
            total_price: encounter.total_price,
        }
    }
}

/// Claim report row. `patient_name` is resolved through the claim's
/// `Patient/{id}` reference and stays `None` when that does not resolve.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimMonthRow {
    pub claim_id: Uuid,
    pub patient_name: Option<String>,
    pub status: ClaimStatus,
    pub created: DateTime<Utc>,
    pub total: f64,
}

impl ClaimMonthRow {
    /// `None` for a claim that was never assigned an id, which the store
    /// does not admit.
    pub fn from_claim(claim: &Claim, patient_name: Option<String>) -> Option<Self> {
        Some(Self {
            claim_id: claim.id?,
            patient_name,
            status: claim.status.clone(),
            created: claim.created,
            total: claim.total.value,
        })
    }
}

/// Caller-derived metrics over one month's claim rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimWindowSummary {
    pub claim_count: usize,
    pub accepted_count: usize,
    pub total_billed: f64,
    /// `None` for an empty window rather than a division by zero.
    pub acceptance_ratio: Option<f64>,
}

/// Whole-system counts with the moment they were taken.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStats {
    pub patients: usize,
    pub encounters: usize,
    pub claims: usize,
    pub generated_at: DateTime<Utc>,
}
