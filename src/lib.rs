// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod face;

// Re-export main types
pub use api::{ApiError, AppState, ErrorResponse, VerifyRequest};
pub use config::NodeConfig;
pub use face::{
    decode_base64_image, FaceVerifier, FaceVerifyClient, MockVerifier, VerifierError,
    VerifyOptions,
};
