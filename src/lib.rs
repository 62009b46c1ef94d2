pub mod api;
pub mod claims;
pub mod config;
pub mod models;
pub mod reporting;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::store::RecordStore;

/// Start the service and run until interrupted.
pub async fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = Arc::new(RecordStore::new());
    let mut server = api::start_api_server(store, config::bind_addr())
        .await
        .expect("error while starting API server");

    tracing::info!(addr = %server.addr, "Ready to accept requests");

    tokio::signal::ctrl_c()
        .await
        .expect("error while listening for shutdown signal");

    tracing::info!("Shutdown requested");
    server.shutdown();
}
