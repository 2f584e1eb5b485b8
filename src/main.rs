// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use face_verify_node::{
    api::start_server,
    config::NodeConfig,
    face::{FaceVerifier, FaceVerifyClient},
};
use std::{env, sync::Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    dotenv::dotenv().ok();

    let config = NodeConfig::from_env();
    info!(
        "Starting face verify node on {} (verifier: {})",
        config.listen_addr(),
        config.verifier_endpoint
    );

    let verifier = Arc::new(FaceVerifyClient::new(
        &config.verifier_endpoint,
        config.verifier_timeout,
    )?);

    // The service still starts when the sidecar is down; requests surface
    // the failure per call.
    if !verifier.health_check().await {
        warn!(
            "Verifier sidecar not reachable at {}",
            config.verifier_endpoint
        );
    }

    start_server(&config, verifier).await?;

    Ok(())
}
