//! Monthly reporting endpoints.
//!
//! - `GET /reports/months` — months that have any data
//! - `GET /reports/patients?month=` — patients registered in a month
//! - `GET /reports/encounters?month=&diagnosis=` — visits in a month
//! - `GET /reports/claims?month=&status=` — claims in a month plus a
//!   billed-total / acceptance-ratio summary
//!
//! `month` is required on the row endpoints and must be `YYYY-MM`.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ClaimStatus, Patient};
use crate::reporting::{
    available_months, claims_in_month, encounters_in_month, patients_in_month, summarize_claims,
    ClaimMonthRow, ClaimWindowSummary, EncounterMonthRow, MonthKey,
};

#[derive(Deserialize)]
pub struct ReportQuery {
    pub month: Option<String>,
    pub diagnosis: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct MonthsResponse {
    pub months: Vec<MonthKey>,
}

#[derive(Serialize)]
pub struct ClaimsReportResponse {
    pub claims: Vec<ClaimMonthRow>,
    pub summary: ClaimWindowSummary,
}

/// `GET /reports/months` — distinct months with data, newest first.
pub async fn months(State(ctx): State<ApiContext>) -> Result<Json<MonthsResponse>, ApiError> {
    let months = available_months(&ctx.store)?;
    Ok(Json(MonthsResponse { months }))
}

/// `GET /reports/patients?month=` — patients registered in the month.
pub async fn patients(
    State(ctx): State<ApiContext>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let key = required_month(&query)?;
    Ok(Json(patients_in_month(&ctx.store, &key)?))
}

/// `GET /reports/encounters?month=&diagnosis=` — encounters in the
/// month, optionally narrowed by a case-insensitive diagnosis substring.
pub async fn encounters(
    State(ctx): State<ApiContext>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<EncounterMonthRow>>, ApiError> {
    let key = required_month(&query)?;
    let rows = encounters_in_month(&ctx.store, &key, query.diagnosis.as_deref())?;
    Ok(Json(rows))
}

/// `GET /reports/claims?month=&status=` — claim rows in the month with
/// the window summary embedded.
pub async fn claims(
    State(ctx): State<ApiContext>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ClaimsReportResponse>, ApiError> {
    let key = required_month(&query)?;
    let status_filter = match query.status.as_deref() {
        Some(raw) => Some(parse_status_filter(raw)?),
        None => None,
    };

    let rows = claims_in_month(&ctx.store, &key, status_filter)?;
    let summary = summarize_claims(&rows);

    Ok(Json(ClaimsReportResponse {
        claims: rows,
        summary,
    }))
}

fn required_month(query: &ReportQuery) -> Result<MonthKey, ApiError> {
    let raw = query
        .month
        .as_deref()
        .ok_or_else(|| ApiError::InvalidInput("month query parameter is required".into()))?;
    Ok(raw.parse::<MonthKey>()?)
}

fn parse_status_filter(raw: &str) -> Result<ClaimStatus, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::InvalidInput(format!("Invalid status filter: {e}")))
}
