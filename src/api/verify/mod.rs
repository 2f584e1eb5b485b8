// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Verify endpoint module
//!
//! POST /verify - face similarity between two base64-encoded images

pub mod handler;
pub mod request;

pub use handler::verify_handler;
pub use request::VerifyRequest;
