//! Integration tests for POST /api/coverage

mod common;

use axum::http::StatusCode;
use common::{assert_api_error, assert_close, assert_ok, assert_status, TestApp};
use primix::models::{AppConfig, CoverageConfig};
use primix_core::GridOrigin;
use serde_json::{json, Value};

#[tokio::test]
async fn test_standard_primaries_cover_everything() {
    let app = TestApp::new();

    let response = app.post_json("/api/coverage", &json!({})).await;

    assert_ok(&response);
    let body: Value = response.json();
    assert_eq!(body["percentage"], 100.0);
    assert_eq!(body["total"], 4096);
    // Samples are only returned on request
    assert_eq!(body["inside"], json!([]));
    assert_eq!(body["outside"], json!([]));
}

#[tokio::test]
async fn test_axes_include_exit_points() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/coverage",
            &json!({
                "primaries": ["#804000", "#00FF00", "#0000FF"],
                "step": 64,
            }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    let axes = body["axes"].as_array().unwrap();
    assert_eq!(axes.len(), 3);
    assert_eq!(axes[0]["primary"], json!({ "r": 128.0, "g": 64.0, "b": 0.0 }));
    assert_eq!(axes[0]["exit"], json!({ "r": 255.0, "g": 127.5, "b": 0.0 }));
    assert_eq!(axes[1]["exit"], json!({ "r": 0.0, "g": 255.0, "b": 0.0 }));
}

#[tokio::test]
async fn test_samples_in_scan_order() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/coverage",
            &json!({ "step": 128, "include_samples": true }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    assert_eq!(body["total"], 8);

    let inside = body["inside"].as_array().unwrap();
    assert_eq!(inside.len(), 8);
    assert_eq!(inside[0], json!({ "r": 64.0, "g": 64.0, "b": 64.0 }));
    assert_eq!(inside[1], json!({ "r": 64.0, "g": 64.0, "b": 192.0 }));
    assert_eq!(inside[7], json!({ "r": 192.0, "g": 192.0, "b": 192.0 }));
}

#[tokio::test]
async fn test_partial_coverage() {
    let app = TestApp::new();

    // Reachable exactly where green >= blue
    let response = app
        .post_json(
            "/api/coverage",
            &json!({
                "primaries": ["#FF0000", "#00FF00", "#00FFFF"],
                "include_samples": true,
            }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    assert_close(body["percentage"].as_f64().unwrap(), 53.125, 1e-9);

    let inside = body["inside"].as_array().unwrap();
    let outside = body["outside"].as_array().unwrap();
    assert_eq!(inside.len() + outside.len(), 4096);
    assert!(inside.iter().all(|c| c["g"].as_f64() >= c["b"].as_f64()));
    assert!(outside.iter().all(|c| c["g"].as_f64() < c["b"].as_f64()));
}

#[tokio::test]
async fn test_corner_origin() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/coverage",
            &json!({ "step": 15, "origin": "corner" }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    // 0, 15, .., 255
    assert_eq!(body["total"], 18 * 18 * 18);
}

#[tokio::test]
async fn test_dependent_primaries_have_zero_coverage() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/coverage",
            &json!({ "primaries": ["#000000", "#00FF00", "#0000FF"] }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    assert_eq!(body["percentage"], 0.0);
    assert_eq!(body["total"], 0);
    assert!(body["axes"][0]["exit"].is_null());
}

#[tokio::test]
async fn test_dependent_primaries_skip_step_validation() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/coverage",
            &json!({
                "primaries": ["#FF0000", "#FF0000", "#0000FF"],
                "step": 1000,
            }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    assert_eq!(body["percentage"], 0.0);
}

#[tokio::test]
async fn test_step_below_minimum_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/coverage", &json!({ "step": 2 }))
        .await;

    assert_api_error(&response, StatusCode::BAD_REQUEST, "must be at least 4");
}

#[tokio::test]
async fn test_dependent_primaries_skip_minimum_step() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/coverage",
            &json!({
                "primaries": ["#FF0000", "#800000", "#0000FF"],
                "step": 2,
            }),
        )
        .await;

    assert_ok(&response);
    let body: Value = response.json();
    assert_eq!(body["percentage"], 0.0);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_negative_step_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/coverage", &json!({ "step": -1 }))
        .await;

    assert_api_error(&response, StatusCode::BAD_REQUEST, "Invalid request body");
}

#[tokio::test]
async fn test_step_above_maximum_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/coverage", &json!({ "step": 256 }))
        .await;

    assert_api_error(
        &response,
        StatusCode::BAD_REQUEST,
        "grid step must be between 1 and 255, got 256",
    );
}

#[tokio::test]
async fn test_unknown_origin_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/coverage", &json!({ "origin": "edge" }))
        .await;

    assert_api_error(&response, StatusCode::BAD_REQUEST, "unknown grid origin");
}

#[tokio::test]
async fn test_configured_defaults_apply() {
    let config = AppConfig {
        primaries: vec![
            "#FF0000".to_string(),
            "#00FF00".to_string(),
            "#00FFFF".to_string(),
        ],
        coverage: CoverageConfig {
            step: 32,
            origin: GridOrigin::Corner,
            min_step: 8,
        },
    };
    let app = TestApp::with_config(config);

    let response = app.post_json("/api/coverage", &json!({})).await;
    assert_ok(&response);
    let body: Value = response.json();
    // 0, 32, .., 224
    assert_eq!(body["total"], 512);
    assert!(body["percentage"].as_f64().unwrap() < 100.0);

    let response = app
        .post_json("/api/coverage", &json!({ "step": 4 }))
        .await;
    assert_api_error(&response, StatusCode::BAD_REQUEST, "must be at least 8");
}

#[tokio::test]
async fn test_shutdown_cancels_scan() {
    let app = TestApp::new();
    app.shutdown.cancel();

    let response = app.post_json("/api/coverage", &json!({})).await;

    assert_status(&response, StatusCode::SERVICE_UNAVAILABLE);
}
