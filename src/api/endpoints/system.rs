//! Service-level endpoints: liveness, record counts, reset.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ConfirmationResponse};
use crate::config;
use crate::reporting::{system_stats, SystemStats};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// `GET /health` — connection check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: config::APP_NAME,
        version: config::APP_VERSION,
    })
}

/// `GET /stats` — record counts with a generation timestamp.
pub async fn stats(State(ctx): State<ApiContext>) -> Result<Json<SystemStats>, ApiError> {
    Ok(Json(system_stats(&ctx.store)?))
}

/// `POST /reset` — drop every stored record.
pub async fn reset(State(ctx): State<ApiContext>) -> Result<Json<ConfirmationResponse>, ApiError> {
    ctx.store.reset_all()?;
    Ok(Json(ConfirmationResponse::new("All records cleared")))
}
