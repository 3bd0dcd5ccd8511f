use axum::{routing::get, Router};
use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

use super::handlers::{self, ServerState};
use crate::adapters::config::server_config::ServerConfig;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {0}")]
    Bind(String),
    #[error("Server stopped unexpectedly")]
    Serve,
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handlers::read_records).post(handlers::write_rows))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip(state))]
pub async fn serve(
    config: &ServerConfig,
    state: Arc<ServerState>,
) -> error_stack::Result<(), ServerError> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .change_context_lazy(|| ServerError::Bind(address.clone()))?;

    info!("Server is listening at http://{}", address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .change_context(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
