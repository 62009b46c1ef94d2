//! Month-windowed filtering and derived metrics over the record store.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{ClaimStatus, Patient};
use crate::store::{RecordStore, StoreError};

use super::month::MonthKey;
use super::types::{ClaimMonthRow, ClaimWindowSummary, EncounterMonthRow, SystemStats};

/// Patients created in the given month, in creation order.
pub fn patients_in_month(
    store: &RecordStore,
    month: &MonthKey,
) -> Result<Vec<Patient>, StoreError> {
    let mut rows = store.patients_snapshot()?;
    rows.retain(|p| month.matches_datetime(&p.created_at));
    rows.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
    Ok(rows)
}

/// Encounters whose visit date falls in the given month, annotated with the
/// owning patient's name, optionally narrowed by a case-insensitive substring
/// match on the diagnosis.
pub fn encounters_in_month(
    store: &RecordStore,
    month: &MonthKey,
    diagnosis_filter: Option<&str>,
) -> Result<Vec<EncounterMonthRow>, StoreError> {
    let names = patient_names(store)?;
    let mut encounters = store.encounters_snapshot()?;
    encounters.retain(|e| month.matches_date(e.visit_date));
    if let Some(needle) = diagnosis_filter {
        let needle = needle.to_lowercase();
        encounters.retain(|e| e.diagnosis.to_lowercase().contains(&needle));
    }
    encounters.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
    Ok(encounters
        .iter()
        .filter_map(|enc| {
            let name = names.get(&enc.patient_id)?;
            Some(EncounterMonthRow::new(enc, name))
        })
        .collect())
}

/// Claims created in the given month, optionally narrowed to one status.
/// Each row carries the patient name resolved via the claim's reference;
/// an unresolvable reference leaves the name unset rather than failing.
pub fn claims_in_month(
    store: &RecordStore,
    month: &MonthKey,
    status_filter: Option<ClaimStatus>,
) -> Result<Vec<ClaimMonthRow>, StoreError> {
    let names = patient_names(store)?;
    let mut claims = store.claims_snapshot()?;
    claims.retain(|c| month.matches_datetime(&c.created));
    if let Some(status) = status_filter {
        claims.retain(|c| c.status == status);
    }
    claims.sort_by(|a, b| (a.created, a.id).cmp(&(b.created, b.id)));
    Ok(claims
        .iter()
        .filter_map(|claim| {
            let name = claim
                .patient
                .target_id()
                .and_then(|id| names.get(&id).cloned());
            ClaimMonthRow::from_claim(claim, name)
        })
        .collect())
}

/// Every distinct month present across patient creations, encounter visits
/// and claim creations, most recent first. Empty iff the store holds no data.
pub fn available_months(store: &RecordStore) -> Result<Vec<MonthKey>, StoreError> {
    let mut months: Vec<MonthKey> = Vec::new();
    months.extend(
        store
            .patients_snapshot()?
            .iter()
            .map(|p| MonthKey::of_datetime(&p.created_at)),
    );
    months.extend(
        store
            .encounters_snapshot()?
            .iter()
            .map(|e| MonthKey::of_date(e.visit_date)),
    );
    months.extend(
        store
            .claims_snapshot()?
            .iter()
            .map(|c| MonthKey::of_datetime(&c.created)),
    );
    months.sort();
    months.dedup();
    months.reverse();
    Ok(months)
}

/// Whole-system counts, encounters summed across every patient bucket.
pub fn system_stats(store: &RecordStore) -> Result<SystemStats, StoreError> {
    Ok(SystemStats {
        patients: store.patients_snapshot()?.len(),
        encounters: store.encounters_snapshot()?.len(),
        claims: store.claims_snapshot()?.len(),
        generated_at: Utc::now(),
    })
}

/// Derived metrics over one month's claim rows. Computed from the rows the
/// caller already holds, never stored.
pub fn summarize_claims(rows: &[ClaimMonthRow]) -> ClaimWindowSummary {
    let claim_count = rows.len();
    let accepted_count = rows
        .iter()
        .filter(|r| r.status == ClaimStatus::Accepted)
        .count();
    let total_billed = rows.iter().map(|r| r.total).sum();
    let acceptance_ratio = if claim_count == 0 {
        None
    } else {
        Some(accepted_count as f64 / claim_count as f64)
    };
    ClaimWindowSummary {
        claim_count,
        accepted_count,
        total_billed,
        acceptance_ratio,
    }
}

fn patient_names(store: &RecordStore) -> Result<HashMap<Uuid, String>, StoreError> {
    Ok(store
        .patients_snapshot()?
        .into_iter()
        .map(|p| (p.id, p.full_name))
        .collect())
}
