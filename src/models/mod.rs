//! Domain model types shared across the crate.

pub mod claim;
pub mod encounter;
pub mod enums;
pub mod patient;

pub use claim::{Claim, ClaimItem, CodeableConcept, Coding, Money, Reference};
pub use encounter::{Encounter, EncounterDraft, EncounterSummary};
pub use enums::{ClaimStatus, Gender};
pub use patient::{Patient, PatientDraft};

use thiserror::Error;

/// Field-level rejection raised when client-supplied data fails a create check.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("{field} out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: String,
    },

    #[error("unknown {field} value '{value}'")]
    UnknownVariant {
        field: &'static str,
        value: String,
    },
}
