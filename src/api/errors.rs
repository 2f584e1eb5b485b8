// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire shape of every failure response: `{"detail": "<message>"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// One or both image keys absent from the request; rejected before any
    /// decoding is attempted.
    MissingImages,
    /// Base64 or image-format decoding failed for the named field.
    InvalidImage { field: String, message: String },
    /// The verification capability failed; carries its textual description.
    Verification(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ApiError::MissingImages => "Both img1 and img2 are required".to_string(),
            ApiError::InvalidImage { message, .. } => message.clone(),
            ApiError::Verification(message) => message.clone(),
        };

        ErrorResponse { detail }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImages
            | ApiError::InvalidImage { .. }
            | ApiError::Verification(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingImages => write!(f, "Both img1 and img2 are required"),
            ApiError::InvalidImage { field, message } => {
                write!(f, "Invalid image in {}: {}", field, message)
            }
            ApiError::Verification(message) => write!(f, "Verification failed: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), axum::Json(self.to_response())).into_response()
    }
}
