// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Face verification call contract

use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Options forwarded to the verification capability for a single request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyOptions {
    pub model_name: String,
    pub detector_backend: String,
    pub distance_metric: String,
    /// Fixed policy: a request fails when no face is found in either image
    pub enforce_detection: bool,
}

/// Errors raised by a verification capability
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The capability refused the request (no face detected, unsupported
    /// model/detector/metric name, internal fault). Carries the capability's
    /// own textual description.
    #[error("{0}")]
    Rejected(String),

    #[error("verifier unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A face-verification capability: given two pixel buffers and per-request
/// options, return the capability's structured verdict or fail with a
/// descriptive fault. The verdict's shape is owned by the capability and
/// passed through untouched.
#[async_trait::async_trait]
pub trait FaceVerifier: Send + Sync {
    async fn verify(
        &self,
        first: &RgbImage,
        second: &RgbImage,
        options: &VerifyOptions,
    ) -> Result<serde_json::Value, VerifierError>;

    async fn health_check(&self) -> bool;
}

/// In-memory verifier for tests: returns a canned verdict or rejection and
/// records the options it was called with.
pub struct MockVerifier {
    outcome: RwLock<Result<serde_json::Value, String>>,
    received: RwLock<Vec<VerifyOptions>>,
}

impl MockVerifier {
    pub fn with_outcome(outcome: serde_json::Value) -> Self {
        Self {
            outcome: RwLock::new(Ok(outcome)),
            received: RwLock::new(Vec::new()),
        }
    }

    pub fn with_rejection(message: &str) -> Self {
        Self {
            outcome: RwLock::new(Err(message.to_string())),
            received: RwLock::new(Vec::new()),
        }
    }

    pub async fn received_options(&self) -> Vec<VerifyOptions> {
        self.received.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.received.read().await.len()
    }
}

#[async_trait::async_trait]
impl FaceVerifier for MockVerifier {
    async fn verify(
        &self,
        _first: &RgbImage,
        _second: &RgbImage,
        options: &VerifyOptions,
    ) -> Result<serde_json::Value, VerifierError> {
        self.received.write().await.push(options.clone());

        match &*self.outcome.read().await {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(VerifierError::Rejected(message.clone())),
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
