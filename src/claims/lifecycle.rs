//! Claim lifecycle: submission and status transitions.
//!
//! States run `active` → `accepted` | `rejected`. Both end states are
//! terminal; a processed claim never changes again and a repeat attempt is
//! refused rather than silently overwritten.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::claim::RESOURCE_TYPE;
use crate::models::{Claim, ClaimStatus};
use crate::store::{RecordStore, StoreError};

/// Allowed drift between a claim total and its line-item sum.
const TOTAL_TOLERANCE: f64 = 0.005;

/// Wire literal acknowledging that a submission was received.
const ACK_STATUS: &str = "accepted";

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid claim: {0}")]
    InvalidClaim(String),

    #[error("claim {id} is already {} and cannot transition again", .status.as_str())]
    StatusFinal { id: Uuid, status: ClaimStatus },

    #[error("target status must be accepted or rejected, got {}", .0.as_str())]
    UnsupportedTarget(ClaimStatus),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Receipt returned on submission.
///
/// `status` acknowledges reception of the document; the stored claim itself
/// always starts in the `active` lifecycle state.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionAck {
    pub claim_id: Uuid,
    pub status: &'static str,
    pub received: DateTime<Utc>,
}

/// Validate, persist and acknowledge a submitted claim document.
///
/// The caller-supplied id and status are discarded: identity is minted here
/// and the status is forced to `active` no matter what the document claims.
pub fn submit_claim(store: &RecordStore, mut claim: Claim) -> Result<SubmissionAck, LifecycleError> {
    validate_shape(&claim)?;
    let id = Uuid::new_v4();
    claim.id = Some(id);
    claim.status = ClaimStatus::Active;
    store.put_claim(claim)?;
    tracing::info!(%id, "Claim submitted");
    Ok(SubmissionAck {
        claim_id: id,
        status: ACK_STATUS,
        received: Utc::now(),
    })
}

fn validate_shape(claim: &Claim) -> Result<(), LifecycleError> {
    if claim.resource_type != RESOURCE_TYPE {
        return Err(LifecycleError::InvalidClaim(format!(
            "resourceType must be \"{}\", got \"{}\"",
            RESOURCE_TYPE, claim.resource_type
        )));
    }
    if claim.item.is_empty() {
        return Err(LifecycleError::InvalidClaim(
            "claim must carry at least one line item".into(),
        ));
    }
    let line_total = claim.line_item_total();
    if (claim.total.value - line_total).abs() > TOTAL_TOLERANCE {
        return Err(LifecycleError::InvalidClaim(format!(
            "total {} does not match line item sum {}",
            claim.total.value, line_total
        )));
    }
    Ok(())
}

/// Transition a stored claim to `accepted` or `rejected`.
///
/// The current-status check and the overwrite happen under one claims write
/// guard, so two concurrent transitions cannot both succeed. A claim already
/// in a terminal state fails with `StatusFinal`.
pub fn process_claim(
    store: &RecordStore,
    id: Uuid,
    target: ClaimStatus,
) -> Result<Claim, LifecycleError> {
    if !target.is_terminal() {
        return Err(LifecycleError::UnsupportedTarget(target));
    }
    let mut claims = store.write_claims()?;
    let claim = claims.get_mut(&id).ok_or(StoreError::NotFound {
        entity: "claim",
        id,
    })?;
    if claim.status.is_terminal() {
        return Err(LifecycleError::StatusFinal {
            id,
            status: claim.status.clone(),
        });
    }
    claim.status = target.clone();
    tracing::info!(%id, status = target.as_str(), "Claim processed");
    Ok(claim.clone())
}
