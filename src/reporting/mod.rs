//! Temporal reporting over the record store.
//!
//! Everything here is windowed by a `YYYY-MM` month key. Membership is
//! string-prefix equality between the key and the entity's governing
//! timestamp (patient creation, encounter visit date, claim creation), so
//! the engine never does calendar arithmetic.

pub mod aggregates;
pub mod month;
pub mod types;

pub use aggregates::{
    available_months, claims_in_month, encounters_in_month, patients_in_month, summarize_claims,
    system_stats,
};
pub use month::{InvalidMonthKey, MonthKey};
pub use types::{ClaimMonthRow, ClaimWindowSummary, EncounterMonthRow, SystemStats};
