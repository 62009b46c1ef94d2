use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// Diagnoses longer than this are shortened with an ellipsis in summary rows.
pub const DIAGNOSIS_DISPLAY_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub diagnosis: String,
    pub treatment: String,
    pub visit_date: NaiveDate,
    pub attending_clinician: Option<String>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for recording an encounter.
#[derive(Debug, Clone, Deserialize)]
pub struct EncounterDraft {
    pub patient_id: Uuid,
    pub diagnosis: String,
    #[serde(default)]
    pub treatment: String,
    pub visit_date: Option<NaiveDate>,
    pub attending_clinician: Option<String>,
    pub total_price: Option<f64>,
}

impl EncounterDraft {
    /// Validate and mint a full record. The visit date falls back to the
    /// current UTC date, so it never lands in the future. Patient existence
    /// is checked by the store at insertion, not here.
    pub fn into_encounter(self) -> Result<Encounter, ValidationError> {
        if self.diagnosis.trim().is_empty() {
            return Err(ValidationError::BlankField("diagnosis"));
        }
        let total_price = self.total_price.unwrap_or(0.0);
        if !total_price.is_finite() || total_price < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "total_price",
                reason: format!("{} is not a non-negative amount", total_price),
            });
        }
        let attending_clinician = self
            .attending_clinician
            .filter(|name| !name.trim().is_empty());
        Ok(Encounter {
            id: Uuid::new_v4(),
            patient_id: self.patient_id,
            diagnosis: self.diagnosis,
            treatment: self.treatment,
            visit_date: self.visit_date.unwrap_or_else(|| Utc::now().date_naive()),
            attending_clinician,
            total_price,
            created_at: Utc::now(),
        })
    }
}

/// Flattened listing row: encounter basics plus the owning patient's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterSummary {
    pub encounter_id: Uuid,
    pub patient_name: String,
    pub visit_date: NaiveDate,
    pub diagnosis: String,
}

impl EncounterSummary {
    pub fn new(encounter: &Encounter, patient_name: &str) -> Self {
        Self {
            encounter_id: encounter.id,
            patient_name: patient_name.to_string(),
            visit_date: encounter.visit_date,
            diagnosis: truncate_diagnosis(&encounter.diagnosis),
        }
    }
}

/// Shorten a diagnosis to [`DIAGNOSIS_DISPLAY_LEN`] characters plus `"..."`.
/// Counts characters rather than bytes so multibyte text is never split.
fn truncate_diagnosis(diagnosis: &str) -> String {
    if diagnosis.chars().count() > DIAGNOSIS_DISPLAY_LEN {
        let head: String = diagnosis.chars().take(DIAGNOSIS_DISPLAY_LEN).collect();
        format!("{}...", head)
    } else {
        diagnosis.to_string()
    }
}
