//! HTTP API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Handlers are thin wrappers over the store, mapper and lifecycle
//! modules; a permissive CORS layer keeps the browser UI usable from
//! any origin.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::store::RecordStore;

/// Build the API router over a shared record store.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(store: Arc<RecordStore>) -> Router {
    let ctx = ApiContext::new(store);

    Router::new()
        .route(
            "/patients",
            post(endpoints::patients::create).get(endpoints::patients::list),
        )
        .route("/patients/:id", get(endpoints::patients::detail))
        .route(
            "/patients/:id/encounters",
            get(endpoints::patients::encounters),
        )
        .route(
            "/encounters",
            post(endpoints::encounters::create).get(endpoints::encounters::list),
        )
        .route("/encounters/:id", get(endpoints::encounters::detail))
        .route(
            "/encounters/:id/claim",
            get(endpoints::encounters::claim_preview),
        )
        .route(
            "/claims",
            post(endpoints::claims::submit).get(endpoints::claims::list),
        )
        .route("/claims/:id", get(endpoints::claims::detail))
        .route("/claims/:id/process", post(endpoints::claims::process))
        .route("/reports/months", get(endpoints::reports::months))
        .route("/reports/patients", get(endpoints::reports::patients))
        .route("/reports/encounters", get(endpoints::reports::encounters))
        .route("/reports/claims", get(endpoints::reports::claims))
        .route("/stats", get(endpoints::system::stats))
        .route("/reset", post(endpoints::system::reset))
        .route("/health", get(endpoints::system::health))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
