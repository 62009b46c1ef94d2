//! Encounter endpoints.
//!
//! - `POST /encounters` — record a clinical visit
//! - `GET /encounters` — cross-patient summary listing
//! - `GET /encounters/:id` — full encounter record
//! - `GET /encounters/:id/claim` — derived claim preview, never persisted

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, CreatedResponse};
use crate::claims::claim_from_encounter;
use crate::models::{Claim, Encounter, EncounterDraft, EncounterSummary};

/// `POST /encounters` — validate and store a visit for an existing patient.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(draft): Json<EncounterDraft>,
) -> Result<(StatusCode, Json<CreatedResponse<Encounter>>), ApiError> {
    let encounter = draft.into_encounter()?;
    let stored = ctx.store.put_encounter(encounter)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Encounter recorded successfully", stored)),
    ))
}

/// `GET /encounters` — summary rows across all patients, with the
/// diagnosis truncated for display.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<EncounterSummary>>, ApiError> {
    Ok(Json(ctx.store.list_encounter_summaries()?))
}

/// `GET /encounters/:id` — full record for one encounter.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(encounter_id): Path<String>,
) -> Result<Json<Encounter>, ApiError> {
    let id = parse_encounter_id(&encounter_id)?;
    Ok(Json(ctx.store.get_encounter(id)?))
}

/// `GET /encounters/:id/claim` — map the encounter to a claim document
/// without storing it. The preview carries no claim id.
pub async fn claim_preview(
    State(ctx): State<ApiContext>,
    Path(encounter_id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    let id = parse_encounter_id(&encounter_id)?;
    let encounter = ctx.store.get_encounter(id)?;
    let patient = ctx.store.get_patient(encounter.patient_id)?;

    Ok(Json(claim_from_encounter(&encounter, &patient)))
}

fn parse_encounter_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::InvalidInput(format!("Invalid encounter ID: {e}")))
}
