// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Verify endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::VerifyRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::face::decode_base64_image;

/// POST /verify - Compare the faces in two base64-encoded images
///
/// Decodes both images and forwards them, with the caller's configuration
/// options, to the verification capability. Its structured verdict is
/// returned verbatim.
///
/// # Request
/// - `img1`, `img2`: Base64-encoded images (required; data-URL prefix allowed)
/// - `model_name`: Embedding model - defaults to "VGG-Face"
/// - `detector_backend`: Face detector - defaults to "opencv"
/// - `distance_metric`: Comparison metric - defaults to "cosine"
///
/// # Response
/// - 200: the capability's verdict, passed through untouched
/// - 400: `{"detail": "<message>"}` for missing keys, undecodable images, or
///   any verification fault (no face found, unsupported option names, ...)
pub async fn verify_handler(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // 1. Both image keys must be present before anything is decoded
    request.validate()?;

    let img1 = request.img1.as_deref().ok_or(ApiError::MissingImages)?;
    let img2 = request.img2.as_deref().ok_or(ApiError::MissingImages)?;

    // 2. Decode both images
    let (first, first_info) = decode_base64_image(img1).map_err(|e| {
        warn!("Failed to decode img1: {}", e);
        ApiError::InvalidImage {
            field: "img1".to_string(),
            message: e.to_string(),
        }
    })?;

    let (second, second_info) = decode_base64_image(img2).map_err(|e| {
        warn!("Failed to decode img2: {}", e);
        ApiError::InvalidImage {
            field: "img2".to_string(),
            message: e.to_string(),
        }
    })?;

    debug!(
        "Decoded images: img1 {}x{} ({} bytes), img2 {}x{} ({} bytes)",
        first_info.width,
        first_info.height,
        first_info.size_bytes,
        second_info.width,
        second_info.height,
        second_info.size_bytes
    );

    // 3. Run verification
    let options = request.options();
    let verdict = state
        .verifier
        .verify(&first, &second, &options)
        .await
        .map_err(|e| {
            warn!("Verification failed: {}", e);
            ApiError::Verification(e.to_string())
        })?;

    info!(
        "Verification complete (model: {}, detector: {}, metric: {})",
        options.model_name, options.detector_backend, options.distance_metric
    );

    Ok(Json(verdict))
}
