//! FHIR-R4-shaped `Claim` document tree.
//!
//! Field names and nesting mirror the wire format consumed by insurance
//! counterparts, so the structs serialize camelCase with the reserved-word
//! fields (`type`, `use`) renamed explicitly. Only the subset of FHIR this
//! service emits is modeled.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ClaimStatus;

pub const RESOURCE_TYPE: &str = "Claim";
pub const USE_CLAIM: &str = "claim";
pub const PRIORITY_NORMAL: &str = "normal";
pub const CURRENCY_USD: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

/// A `Kind/id` pointer to another resource, e.g. `Patient/7f3c...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
}

impl Reference {
    pub fn patient(id: Uuid) -> Self {
        Self {
            reference: format!("Patient/{}", id),
        }
    }

    pub fn encounter(id: Uuid) -> Self {
        Self {
            reference: format!("Encounter/{}", id),
        }
    }

    pub fn practitioner(code: u64) -> Self {
        Self {
            reference: format!("Practitioner/{:04}", code),
        }
    }

    /// The id part of the reference, when it is a UUID.
    /// `Practitioner/0042`-style synthetic references yield `None`.
    pub fn target_id(&self) -> Option<Uuid> {
        let (_, tail) = self.reference.split_once('/')?;
        tail.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub value: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Money {
    pub fn usd(value: f64) -> Self {
        Self {
            value,
            currency: CURRENCY_USD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItem {
    pub sequence: u32,
    pub product_or_service: CodeableConcept,
    pub serviced_date: NaiveDate,
    pub unit_price: Money,
    pub net: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    /// Absent on a preview; assigned at submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default = "default_status")]
    pub status: ClaimStatus,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    pub patient: Reference,
    pub encounter: Reference,
    pub created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,
    #[serde(rename = "use", default = "default_use")]
    pub use_: String,
    #[serde(default = "default_priority")]
    pub priority: CodeableConcept,
    pub item: Vec<ClaimItem>,
    pub total: Money,
}

impl Claim {
    /// Sum of the line items' net amounts, which the total must match.
    pub fn line_item_total(&self) -> f64 {
        self.item.iter().map(|item| item.net.value).sum()
    }
}

fn default_resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

fn default_status() -> ClaimStatus {
    ClaimStatus::Active
}

fn default_use() -> String {
    USE_CLAIM.to_string()
}

fn default_priority() -> CodeableConcept {
    CodeableConcept {
        coding: vec![Coding {
            system: None,
            code: PRIORITY_NORMAL.to_string(),
        }],
    }
}

fn default_currency() -> String {
    CURRENCY_USD.to_string()
}
