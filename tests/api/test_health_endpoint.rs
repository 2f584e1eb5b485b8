// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for GET /health

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use face_verify_node::{
    api::{build_router, AppState},
    face::MockVerifier,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_ok_and_verifier_reachability() {
    let verifier = Arc::new(MockVerifier::with_outcome(json!({})));
    let app = build_router(AppState::new(verifier));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["verifier_reachable"], true);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let verifier = Arc::new(MockVerifier::with_outcome(json!({})));
    let app = build_router(AppState::new(verifier));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
