//! Claim endpoints.
//!
//! - `POST /claims` — submit a claim document
//! - `GET /claims` — list stored claims
//! - `GET /claims/:id` — single claim document
//! - `POST /claims/:id/process` — adjudicate an active claim

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::claims::{process_claim, submit_claim, SubmissionAck};
use crate::models::{Claim, ClaimStatus};

/// `POST /claims` — validate and persist a submitted claim document.
///
/// The submitted status is ignored; stored claims always start `active`.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(claim): Json<Claim>,
) -> Result<(StatusCode, Json<SubmissionAck>), ApiError> {
    let ack = submit_claim(&ctx.store, claim)?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// `GET /claims` — all stored claims, oldest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Claim>>, ApiError> {
    Ok(Json(ctx.store.list_claims()?))
}

/// `GET /claims/:id` — one claim document.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(claim_id): Path<String>,
) -> Result<Json<Claim>, ApiError> {
    let id = parse_claim_id(&claim_id)?;
    Ok(Json(ctx.store.get_claim(id)?))
}

#[derive(Deserialize)]
pub struct ProcessRequest {
    pub status: String,
}

/// `POST /claims/:id/process` — move an active claim to `accepted` or
/// `rejected`. A claim already in a terminal state is a 409.
pub async fn process(
    State(ctx): State<ApiContext>,
    Path(claim_id): Path<String>,
    Json(request): Json<ProcessRequest>,
) -> Result<Json<Claim>, ApiError> {
    let id = parse_claim_id(&claim_id)?;
    let target: ClaimStatus = request
        .status
        .parse()
        .map_err(|e| ApiError::InvalidInput(format!("Invalid target status: {e}")))?;

    Ok(Json(process_claim(&ctx.store, id, target)?))
}

fn parse_claim_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError::InvalidInput(format!("Invalid claim ID: {e}")))
}
