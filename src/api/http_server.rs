use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::verify::verify_handler;
use crate::config::NodeConfig;
use crate::face::FaceVerifier;

/// Two 10MB images expand by ~4/3 under base64; leave headroom above that.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn FaceVerifier>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn FaceVerifier>) -> Self {
        Self { verifier }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub verifier_reachable: bool,
}

/// Build the service router: the verify endpoint, a health probe, and a
/// permissive CORS policy (all origins, methods and headers).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/verify", post(verify_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    config: &NodeConfig,
    verifier: Arc<dyn FaceVerifier>,
) -> Result<()> {
    let app = build_router(AppState::new(verifier));

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let verifier_reachable = state.verifier.health_check().await;

    axum::Json(HealthResponse {
        status: "ok".to_string(),
        verifier_reachable,
    })
}
