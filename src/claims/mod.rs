//! Encounter→claim synthesis and claim lifecycle management.

pub mod lifecycle;
pub mod mapper;

pub use lifecycle::{process_claim, submit_claim, LifecycleError, SubmissionAck};
pub use mapper::claim_from_encounter;
