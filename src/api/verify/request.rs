// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Verify request type and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::face::VerifyOptions;

fn default_model_name() -> String {
    "VGG-Face".to_string()
}

fn default_detector_backend() -> String {
    "opencv".to_string()
}

fn default_distance_metric() -> String {
    "cosine".to_string()
}

/// Request for face verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// First base64-encoded image (data-URL prefix allowed)
    #[serde(default)]
    pub img1: Option<String>,

    /// Second base64-encoded image (data-URL prefix allowed)
    #[serde(default)]
    pub img2: Option<String>,

    /// Embedding model identifier
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Face localization backend identifier
    #[serde(default = "default_detector_backend")]
    pub detector_backend: String,

    /// Embedding distance function identifier
    #[serde(default = "default_distance_metric")]
    pub distance_metric: String,
}

impl VerifyRequest {
    /// Validate the verify request. Only key presence is checked here;
    /// payload content faults surface from the decode step.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.img1.is_none() || self.img2.is_none() {
            return Err(ApiError::MissingImages);
        }

        Ok(())
    }

    /// Options forwarded to the verification capability. Detection
    /// enforcement is not caller-selectable: a request must fail when no
    /// face is found in either image.
    pub fn options(&self) -> VerifyOptions {
        VerifyOptions {
            model_name: self.model_name.clone(),
            detector_backend: self.detector_backend.clone(),
            distance_metric: self.distance_metric.clone(),
            enforce_detection: true,
        }
    }
}
