//! In-memory record store shared by all request handlers.
//!
//! Three keyed collections guarded by per-collection `RwLock`s. Constructed
//! once at startup and passed around behind `Arc`, never a global. Mutations
//! serialize per collection; reads clone consistent snapshots under a read
//! guard.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::{Claim, ClaimStatus, Encounter, EncounterSummary, Patient};

// ═══════════════════════════════════════════════════════════
// RecordStore
// ═══════════════════════════════════════════════════════════

pub struct RecordStore {
    patients: RwLock<HashMap<Uuid, Patient>>,
    /// Encounters bucketed by owning patient id, insertion-ordered per bucket.
    encounters: RwLock<HashMap<Uuid, Vec<Encounter>>>,
    claims: RwLock<HashMap<Uuid, Claim>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(HashMap::new()),
            encounters: RwLock::new(HashMap::new()),
            claims: RwLock::new(HashMap::new()),
        }
    }

    // ── Patients ────────────────────────────────────────────

    pub fn put_patient(&self, patient: Patient) -> Result<Patient, StoreError> {
        let mut patients = self.patients.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::debug!(id = %patient.id, "Patient stored");
        patients.insert(patient.id, patient.clone());
        Ok(patient)
    }

    pub fn get_patient(&self, id: Uuid) -> Result<Patient, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockPoisoned)?;
        patients.get(&id).cloned().ok_or(StoreError::NotFound {
            entity: "patient",
            id,
        })
    }

    /// All patients, ordered by creation time then id so listings are stable.
    pub fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        let mut all = self.patients_snapshot()?;
        all.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(all)
    }

    // ── Encounters ──────────────────────────────────────────

    /// Record an encounter for an existing patient.
    ///
    /// The patient-existence check and the append happen inside one critical
    /// section: the patients read guard is held across the encounters write,
    /// so a concurrent reset cannot slip between check and insert. Lock order
    /// is patients then encounters everywhere.
    pub fn put_encounter(&self, encounter: Encounter) -> Result<Encounter, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockPoisoned)?;
        if !patients.contains_key(&encounter.patient_id) {
            return Err(StoreError::NotFound {
                entity: "patient",
                id: encounter.patient_id,
            });
        }
        let mut encounters = self.encounters.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::debug!(id = %encounter.id, patient_id = %encounter.patient_id, "Encounter stored");
        encounters
            .entry(encounter.patient_id)
            .or_default()
            .push(encounter.clone());
        Ok(encounter)
    }

    /// Encounters for one patient in insertion order. Fails with `NotFound`
    /// for an unknown patient; a known patient with no encounters yields an
    /// empty list.
    pub fn encounters_for_patient(&self, patient_id: Uuid) -> Result<Vec<Encounter>, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockPoisoned)?;
        if !patients.contains_key(&patient_id) {
            return Err(StoreError::NotFound {
                entity: "patient",
                id: patient_id,
            });
        }
        let encounters = self.encounters.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(encounters.get(&patient_id).cloned().unwrap_or_default())
    }

    /// Flattened listing across all patients, each row annotated with the
    /// owning patient's name and a display-truncated diagnosis.
    pub fn list_encounter_summaries(&self) -> Result<Vec<EncounterSummary>, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockPoisoned)?;
        let encounters = self.encounters.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut all: Vec<&Encounter> = encounters.values().flatten().collect();
        all.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(all
            .into_iter()
            .filter_map(|enc| {
                let patient = patients.get(&enc.patient_id)?;
                Some(EncounterSummary::new(enc, &patient.full_name))
            })
            .collect())
    }

    pub fn get_encounter(&self, id: Uuid) -> Result<Encounter, StoreError> {
        let encounters = self.encounters.read().map_err(|_| StoreError::LockPoisoned)?;
        encounters
            .values()
            .flatten()
            .find(|enc| enc.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "encounter",
                id,
            })
    }

    // ── Claims ──────────────────────────────────────────────

    /// Persist a submitted claim. The id must already be assigned; a claim
    /// without identity never reaches the store.
    pub fn put_claim(&self, claim: Claim) -> Result<Uuid, StoreError> {
        let id = claim.id.ok_or(StoreError::ClaimMissingId)?;
        let mut claims = self.claims.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::debug!(%id, "Claim stored");
        claims.insert(id, claim);
        Ok(id)
    }

    pub fn get_claim(&self, id: Uuid) -> Result<Claim, StoreError> {
        let claims = self.claims.read().map_err(|_| StoreError::LockPoisoned)?;
        claims.get(&id).cloned().ok_or(StoreError::NotFound {
            entity: "claim",
            id,
        })
    }

    pub fn list_claims(&self) -> Result<Vec<Claim>, StoreError> {
        let mut all = self.claims_snapshot()?;
        all.sort_by(|a, b| (a.created, a.id).cmp(&(b.created, b.id)));
        Ok(all)
    }

    /// Unconditional status overwrite. Lifecycle legality is enforced by the
    /// lifecycle manager, which uses `write_claims` for its check-and-set.
    pub fn update_claim_status(&self, id: Uuid, new_status: ClaimStatus) -> Result<Claim, StoreError> {
        let mut claims = self.claims.write().map_err(|_| StoreError::LockPoisoned)?;
        let claim = claims.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "claim",
            id,
        })?;
        tracing::debug!(%id, status = new_status.as_str(), "Claim status updated");
        claim.status = new_status;
        Ok(claim.clone())
    }

    /// Write access to the claims collection, for transitions that must
    /// check and set status under a single guard.
    pub fn write_claims(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Claim>>, StoreError> {
        self.claims.write().map_err(|_| StoreError::LockPoisoned)
    }

    // ── Reset & snapshots ───────────────────────────────────

    /// Clear every collection atomically. All three write guards are taken
    /// in the fixed patients → encounters → claims order before anything is
    /// touched, so no concurrent reader observes a partial reset.
    pub fn reset_all(&self) -> Result<(), StoreError> {
        let mut patients = self.patients.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut encounters = self.encounters.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut claims = self.claims.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::info!(
            patients = patients.len(),
            encounters = encounters.values().map(Vec::len).sum::<usize>(),
            claims = claims.len(),
            "Store reset"
        );
        patients.clear();
        encounters.clear();
        claims.clear();
        Ok(())
    }

    /// Cloned consistent view of the patients collection, unordered.
    pub fn patients_snapshot(&self) -> Result<Vec<Patient>, StoreError> {
        let patients = self.patients.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(patients.values().cloned().collect())
    }

    /// Cloned consistent view of all encounters, flattened across buckets.
    pub fn encounters_snapshot(&self) -> Result<Vec<Encounter>, StoreError> {
        let encounters = self.encounters.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(encounters.values().flatten().cloned().collect())
    }

    /// Cloned consistent view of the claims collection, unordered.
    pub fn claims_snapshot(&self) -> Result<Vec<Claim>, StoreError> {
        let claims = self.claims.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(claims.values().cloned().collect())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("claim has no id assigned")]
    ClaimMissingId,
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
