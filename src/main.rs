//! API server entrypoint.

use record_service::infra::{config, logging};
use record_service::{transport, DatabaseService, ServiceConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let service_config = ServiceConfig::from_env()?;
    logging::init_tracing(&config::log_filter());

    // --- Storage Initialization ---
    tracing::info!("initializing database service");
    let db_service = DatabaseService::new(&service_config).await?;
    let store = Arc::new(db_service.record_store());
    let app_state = transport::http::AppState::new(store);

    // --- API Server Initialization ---
    let app = transport::http::create_app(app_state);
    let listener = tokio::net::TcpListener::bind(service_config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_service.close().await;
    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
