//! Patient endpoints.
//!
//! - `POST /patients` — register a patient
//! - `GET /patients` — list all patients
//! - `GET /patients/:id` — single patient record
//! - `GET /patients/:id/encounters` — visit history for one patient

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, CreatedResponse};
use crate::models::{Encounter, Patient, PatientDraft};

/// `POST /patients` — validate and store a new patient record.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(draft): Json<PatientDraft>,
) -> Result<(StatusCode, Json<CreatedResponse<Patient>>), ApiError> {
    let patient = draft.into_patient()?;
    let stored = ctx.store.put_patient(patient)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Patient created successfully", stored)),
    ))
}

/// `GET /patients` — all patients, oldest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(ctx.store.list_patients()?))
}

/// `GET /patients/:id` — one patient record.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    let id = parse_patient_id(&patient_id)?;
    Ok(Json(ctx.store.get_patient(id)?))
}

/// `GET /patients/:id/encounters` — the patient's visit history.
///
/// Unknown patient is a 404; a known patient with no visits is an
/// empty list.
pub async fn encounters(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Result<Json<Vec<Encounter>>, ApiError> {
    let id = parse_patient_id(&patient_id)?;
    Ok(Json(ctx.store.encounters_for_patient(id)?))
}

fn parse_patient_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::InvalidInput(format!("Invalid patient ID: {e}")))
}
