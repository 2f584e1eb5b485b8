// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Face verification support module
//!
//! This module provides:
//! - Base64-to-pixel-buffer decoding for request images
//! - The `FaceVerifier` call contract and its sidecar-backed implementation
//!
//! Detection, embedding extraction and distance thresholding all live in the
//! verifier sidecar; nothing here inspects pixel content.

pub mod client;
pub mod image_utils;
pub mod verifier;

pub use client::FaceVerifyClient;
pub use image_utils::{decode_base64_image, decode_image_bytes, detect_format, ImageError, ImageInfo};
pub use verifier::{FaceVerifier, MockVerifier, VerifierError, VerifyOptions};
