//! HTTP API surface.
//!
//! The router is composable — `api_router()` returns a `Router` that
//! can be mounted on any axum server instance; `start_api_server()`
//! runs it on a background task with graceful shutdown.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
