// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Verifier sidecar client

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbImage;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::verifier::{FaceVerifier, VerifierError, VerifyOptions};

// --- Sidecar wire structs ---

#[derive(serde::Serialize)]
struct PixelBuffer {
    width: u32,
    height: u32,
    /// Base64 of the raw RGB8 bytes, row-major
    data: String,
}

#[derive(serde::Serialize)]
struct VerifyPayload {
    img1: PixelBuffer,
    img2: PixelBuffer,
    model_name: String,
    detector_backend: String,
    distance_metric: String,
    enforce_detection: bool,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for calling the face-verification sidecar service
pub struct FaceVerifyClient {
    client: Client,
    endpoint: String,
}

impl FaceVerifyClient {
    /// Create a new verifier client
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Verifier client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn pixel_buffer(image: &RgbImage) -> PixelBuffer {
    PixelBuffer {
        width: image.width(),
        height: image.height(),
        data: STANDARD.encode(image.as_raw()),
    }
}

/// Turn a non-2xx sidecar body into the capability's textual description.
/// The sidecar reports faults as `{"detail": "..."}`; fall back to the raw
/// body, then to the status code, when that shape is absent.
fn rejection_detail(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }
    if body.trim().is_empty() {
        format!("verifier returned status {}", status)
    } else {
        body.to_string()
    }
}

#[async_trait::async_trait]
impl FaceVerifier for FaceVerifyClient {
    async fn verify(
        &self,
        first: &RgbImage,
        second: &RgbImage,
        options: &VerifyOptions,
    ) -> Result<serde_json::Value, VerifierError> {
        let payload = VerifyPayload {
            img1: pixel_buffer(first),
            img2: pixel_buffer(second),
            model_name: options.model_name.clone(),
            detector_backend: options.detector_backend.clone(),
            distance_metric: options.distance_metric.clone(),
            enforce_detection: options.enforce_detection,
        };

        let response = self
            .client
            .post(format!("{}/verify", self.endpoint))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(VerifierError::Rejected(rejection_detail(status, &body)))
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.endpoint))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("Verifier health check failed: {}", e);
                false
            }
        }
    }
}
