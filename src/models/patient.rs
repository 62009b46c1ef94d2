use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Gender;
use super::ValidationError;

pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
    pub chief_complaint: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for registering a patient.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientDraft {
    pub full_name: String,
    pub age: u32,
    pub gender: String,
    pub chief_complaint: String,
}

impl PatientDraft {
    /// Validate and mint a full record with server-assigned id and timestamp.
    pub fn into_patient(self) -> Result<Patient, ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::BlankField("full_name"));
        }
        if self.age > MAX_AGE {
            return Err(ValidationError::OutOfRange {
                field: "age",
                reason: format!("{} exceeds maximum of {}", self.age, MAX_AGE),
            });
        }
        if self.chief_complaint.trim().is_empty() {
            return Err(ValidationError::BlankField("chief_complaint"));
        }
        let gender = Gender::parse_insensitive(&self.gender)?;
        Ok(Patient {
            id: Uuid::new_v4(),
            full_name: self.full_name,
            age: self.age,
            gender,
            chief_complaint: self.chief_complaint,
            created_at: Utc::now(),
        })
    }
}
